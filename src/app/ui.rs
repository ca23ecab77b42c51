use super::{Section, VirusGuardApp};
use crate::intake::MAX_FILES;
use crate::utils::color;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, RichText, Stroke};
use tracing::{debug, warn};

impl VirusGuardApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_hero(ui);
                self.render_intake_card(ui);
                self.render_highlights(ui);
                self.render_features(ui);
                self.render_about(ui);
                self.render_contact(ui);
                self.render_footer(ui);
            });
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("🛡").size(22.0).color(color::PRIMARY));
            ui.label(RichText::new("VirusGuard").size(20.0).strong());

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Войти").clicked() {
                    debug!("Login requested, accounts are not part of the demo build");
                }
                ui.add_space(12.0);
                if ui.link("Контакты").clicked() {
                    self.request_scroll(Section::Contact);
                }
                if ui.link("О сервисе").clicked() {
                    self.request_scroll(Section::About);
                }
                // The web page has no docs section either; the entry is inert.
                let _ = ui.link("Документация");
                if ui.link("Возможности").clicked() {
                    self.request_scroll(Section::Features);
                }
            });
        });
        ui.add_space(8.0);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        ui.add_space(36.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Проверка файлов на вирусы")
                    .size(34.0)
                    .strong()
                    .color(color::PRIMARY),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Множественное сканирование с использованием облачных антивирусных движков.\n\
                     Быстро, надежно, безопасно.",
                )
                .size(16.0)
                .color(color::MUTED),
            );
        });
        ui.add_space(28.0);
    }

    fn render_intake_card(&mut self, ui: &mut egui::Ui) {
        let stroke = if self.state.is_dragging {
            Stroke::new(2.0, color::PRIMARY)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        ui.vertical_centered(|ui| {
            ui.set_max_width(680.0);

            egui::Frame::none()
                .stroke(stroke)
                .rounding(12.0)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    if self.state.batch().is_empty() {
                        self.render_empty_intake(ui);
                    } else {
                        self.render_selection(ui);
                    }
                });

            if let Some(error) = &self.state.error_message {
                ui.add_space(8.0);
                ui.colored_label(color::ERROR, error);
            }
        });
    }

    fn render_empty_intake(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("📤").size(44.0).color(color::PRIMARY));
            ui.add_space(12.0);
            ui.label(
                RichText::new("Загрузите файлы для проверки")
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("Перетащите файлы сюда или выберите с устройства")
                    .color(color::MUTED),
            );
            ui.add_space(16.0);

            let button = egui::Button::new("📂 Выбрать файлы").min_size(egui::vec2(180.0, 36.0));
            if ui.add(button).clicked() {
                self.pick_files();
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "Поддерживаются все типы файлов. Максимум {} файлов одновременно.",
                    MAX_FILES
                ))
                .size(12.0)
                .color(color::MUTED),
            );
        });
    }

    fn render_selection(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.state.selection_heading())
                    .size(18.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button("✖ Очистить").clicked() {
                    self.state.clear();
                }
            });
        });
        ui.add_space(8.0);

        let scanning = self.state.is_scanning();

        egui::ScrollArea::vertical()
            .id_source("intake_rows")
            .max_height(256.0)
            .show(ui, |ui| {
                for file in self.state.batch().files() {
                    egui::Frame::none()
                        .fill(ui.visuals().faint_bg_color)
                        .rounding(8.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("📄").color(color::PRIMARY));
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&file.name).strong());
                                    ui.label(
                                        RichText::new(FileSizeUtils::format_kb(file.size_bytes))
                                            .size(11.0)
                                            .color(color::MUTED),
                                    );
                                });
                                if scanning {
                                    // Busy marker only; no per-file verdict exists.
                                    ui.with_layout(
                                        egui::Layout::right_to_left(Align::Center),
                                        |ui| {
                                            ui.add(egui::Spinner::new().size(18.0));
                                        },
                                    );
                                }
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        ui.add_space(16.0);

        if let Some(session) = self.state.scan() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Сканирование...").strong());
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(session.progress_label()).color(color::MUTED));
                });
            });
            ui.add(
                egui::ProgressBar::new(session.progress_fraction())
                    .animate(false)
                    .fill(color::PRIMARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(session.engines_label())
                    .size(12.0)
                    .color(color::MUTED),
            );
        } else {
            let button = egui::Button::new(RichText::new("🔍 Начать проверку").size(16.0));
            if ui.add_sized([ui.available_width(), 40.0], button).clicked() {
                self.state.start_scan(&self.scanner);
            }
        }
    }

    fn render_highlights(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.columns(3, |columns| {
            highlight_card(
                &mut columns[0],
                "⚡",
                color::PRIMARY,
                "Быстрое сканирование",
                "Результаты за секунды благодаря облачной инфраструктуре",
            );
            highlight_card(
                &mut columns[1],
                "🗂",
                color::SECONDARY,
                "Множественная проверка",
                "Сканирование 12+ движками одновременно",
            );
            highlight_card(
                &mut columns[2],
                "🔒",
                color::PRIMARY,
                "Конфиденциальность",
                "Файлы удаляются сразу после проверки",
            );
        });
    }

    fn render_features(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        let heading = ui
            .vertical_centered(|ui| {
                ui.label(
                    RichText::new("Возможности")
                        .size(28.0)
                        .strong()
                        .color(color::PRIMARY),
                )
            })
            .inner;
        if self.take_scroll(Section::Features) {
            heading.scroll_to_me(Some(Align::TOP));
        }
        ui.add_space(16.0);

        ui.columns(2, |columns| {
            feature_card(
                &mut columns[0],
                "📑",
                color::PRIMARY,
                "Все форматы файлов",
                "Поддержка документов, архивов, изображений, видео, исполняемых файлов и более 300 форматов",
            );
            feature_card(
                &mut columns[1],
                "🌐",
                color::SECONDARY,
                "API для разработчиков",
                "REST API с детальной документацией для интеграции в ваши приложения",
            );
        });
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            feature_card(
                &mut columns[0],
                "🕓",
                color::PRIMARY,
                "История проверок",
                "Сохранение результатов с детальными отчетами и возможностью экспорта",
            );
            feature_card(
                &mut columns[1],
                "📈",
                color::SECONDARY,
                "Аналитика угроз",
                "Статистика обнаруженных угроз и рекомендации по безопасности",
            );
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let _ = ui.button("📖 Посмотреть все возможности");
        });
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        let heading = ui
            .vertical_centered(|ui| {
                ui.label(
                    RichText::new("О сервисе")
                        .size(28.0)
                        .strong()
                        .color(color::PRIMARY),
                )
            })
            .inner;
        if self.take_scroll(Section::About) {
            heading.scroll_to_me(Some(Align::TOP));
        }
        ui.add_space(16.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.label(RichText::new("Технологии защиты").size(18.0).strong());
            ui.add_space(8.0);
            ui.label(
                "VirusGuard использует передовые облачные технологии для обнаружения \
                 вредоносного ПО. Наша система агрегирует результаты от ведущих \
                 антивирусных движков мира.",
            );
            ui.add_space(8.0);
            ui.label(
                "Мы обрабатываем миллионы файлов ежедневно, постоянно обновляя базы \
                 данных угроз и улучшая алгоритмы детектирования.",
            );

            let ui = &mut columns[1];
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .rounding(10.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    stat_row(ui, "Движков проверки", "12+");
                    stat_row(ui, "Файлов в день", "2M+");
                    stat_row(ui, "Время сканирования", "<5s");
                    stat_row(ui, "Точность", "99.8%");
                });
        });

        ui.add_space(16.0);
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .rounding(10.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🛡").size(26.0).color(color::PRIMARY));
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("Безопасность превыше всего")
                                .size(16.0)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(
                                "Все файлы обрабатываются в изолированной среде. Мы не \
                                 сохраняем ваши данные и не передаем их третьим лицам. \
                                 Соединение защищено SSL-шифрованием.",
                            )
                            .color(color::MUTED),
                        );
                    });
                });
            });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        let heading = ui
            .vertical_centered(|ui| {
                ui.label(
                    RichText::new("Свяжитесь с нами")
                        .size(28.0)
                        .strong()
                        .color(color::PRIMARY),
                )
            })
            .inner;
        if self.take_scroll(Section::Contact) {
            heading.scroll_to_me(Some(Align::TOP));
        }
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(
                    "Нужна помощь или хотите интегрировать наш сервис? Мы всегда рады помочь!",
                )
                .color(color::MUTED),
            );
        });
        ui.add_space(16.0);

        ui.columns(3, |columns| {
            highlight_card(
                &mut columns[0],
                "✉",
                color::PRIMARY,
                "Email",
                "support@virusguard.com",
            );
            highlight_card(
                &mut columns[1],
                "💬",
                color::SECONDARY,
                "Чат",
                "24/7 поддержка",
            );
            highlight_card(
                &mut columns[2],
                "📄",
                color::PRIMARY,
                "Документация",
                "API & Гайды",
            );
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button("✉ Написать нам").clicked() {
                if let Err(e) = open::that("mailto:support@virusguard.com") {
                    warn!("Failed to open mail client: {}", e);
                }
            }
        });
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.separator();
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("🛡").color(color::PRIMARY));
            ui.label(RichText::new("VirusGuard").strong());
            ui.label(
                RichText::new("© 2024 VirusGuard. Все права защищены.")
                    .size(12.0)
                    .color(color::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                // Placeholder links, same as the web footer.
                let _ = ui.link("Условия использования");
                let _ = ui.link("Политика конфиденциальности");
            });
        });
        ui.add_space(12.0);
    }
}

fn highlight_card(
    ui: &mut egui::Ui,
    icon: &str,
    icon_color: egui::Color32,
    title: &str,
    body: &str,
) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(icon).size(24.0).color(icon_color));
                ui.add_space(6.0);
                ui.label(RichText::new(title).strong());
                ui.add_space(4.0);
                ui.label(RichText::new(body).size(12.0).color(color::MUTED));
            });
        });
}

fn feature_card(
    ui: &mut egui::Ui,
    icon: &str,
    icon_color: egui::Color32,
    title: &str,
    body: &str,
) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(22.0).color(icon_color));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(15.0).strong());
                    ui.label(RichText::new(body).size(12.0).color(color::MUTED));
                });
            });
        });
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(value)
                    .size(20.0)
                    .strong()
                    .color(color::PRIMARY),
            );
        });
    });
    ui.add_space(6.0);
}
