//! Conversation engine
//!
//! Turns a classified message into a reply: canned text plus follow-up
//! suggestions for most intents, a synthesize-then-archive build for
//! `create_project`. Build failures become structured error replies with
//! retry suggestions; nothing propagates to the transport layer uncaught.

use crate::configuration::Settings;
use crate::helpers::archiver;
use crate::models::{ChatReply, Intent};
use crate::services::classifier;
use crate::services::session::Session;
use crate::services::synthesizer::ProjectGenerator;

pub struct ConversationEngine {
    generator: ProjectGenerator,
    settings: Settings,
}

impl ConversationEngine {
    pub fn new(generator: ProjectGenerator, settings: Settings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Derive a reply for `message` and append it to the session history.
    pub fn respond(&self, session: &mut Session, message: &str) -> ChatReply {
        let intent = classifier::classify(message);
        session.record(message, intent);
        tracing::debug!(?intent, history = session.history.len(), "message classified");

        match intent {
            Intent::Greeting => canned(
                "Привет! 👋 Я SiteForge - ваш помощник в создании кода. Я могу помочь вам создать веб-приложения, сайты, игры и многое другое! Что вас интересует?",
                &[
                    "Расскажи, что ты умеешь",
                    "Создай будильник",
                    "Сделай калькулятор",
                    "Хочу игру",
                ],
            ),
            Intent::Wellbeing => canned(
                "Спасибо, у меня всё отлично! 😊 Я готов помочь вам создать что-то интересное. Может быть, хотите попробовать создать приложение?",
                &[
                    "Создай будильник",
                    "Сделай калькулятор",
                    "Хочу игру",
                    "Расскажи о возможностях",
                ],
            ),
            Intent::GameDiscussion => canned(
                "Отлично! 🎮 Игры - это всегда интересно! Я могу создать для вас различные игры:\n\n• 🎯 Игры на реакцию и точность\n• 🧩 Головоломки и пазлы\n• 🎲 Простые аркадные игры\n• 🏆 С системой очков и рекордов\n\nКакая игра вам больше нравится? Или есть конкретные идеи?",
                &[
                    "Создай игру на реакцию",
                    "Сделай головоломку",
                    "Аркадная игра",
                    "Расскажи подробнее",
                ],
            ),
            Intent::Suggestions => canned(
                "Отличный вопрос! 🤔 Вот что я могу предложить создать прямо сейчас:\n\n🎮 **Игры:** аркадные, головоломки, на реакцию\n⏰ **Приложения:** будильники, калькуляторы, таймеры\n🎨 **Креативные проекты:** портфолио, презентации\n\nЧто из этого вас больше всего интересует? Или есть другие идеи?",
                &[
                    "Расскажи про игры",
                    "Покажи приложения",
                    "Креативные проекты",
                    "Создай что-нибудь",
                ],
            ),
            Intent::Capabilities => canned(
                "Я умею создавать различные веб-приложения! 🚀\n\n• ⏰ Будильники и таймеры\n• 🧮 Калькуляторы\n• 🎮 Простые игры\n• 📱 Адаптивные сайты\n• 🎨 Красивые интерфейсы\n\nПросто скажите, что хотите создать, и я предложу лучшие варианты!",
                &[
                    "Создай будильник",
                    "Сделай калькулятор",
                    "Хочу игру",
                    "Покажи примеры",
                ],
            ),
            Intent::CreateProject => self.create_project_reply(message),
            Intent::General => canned(
                "Интересно! 🤔 Расскажите подробнее, что вы хотели бы создать? Я могу помочь с веб-приложениями, играми, калькуляторами и многим другим.",
                &[
                    "Создай будильник",
                    "Сделай калькулятор",
                    "Хочу игру",
                    "Расскажи о возможностях",
                ],
            ),
        }
    }

    /// Second-level keyword scan: pick a concrete build from the message.
    fn create_project_reply(&self, message: &str) -> ChatReply {
        let message = message.to_lowercase();

        if message.contains("калькулятор") {
            self.build_project(
                "calculator",
                "Создаю красивый калькулятор с современным дизайном",
            )
        } else if message.contains("будильник") {
            self.build_project("alarm", "Создаю стильный будильник с звуковыми сигналами")
        } else if message.contains("игр") {
            self.build_project("game", "Создаю увлекательную игру с интересной механикой")
        } else if message.contains("сайт") && message.contains("университет") {
            self.build_project("university", "Создаю современный сайт для университета")
        } else {
            canned(
                "Отлично! 🚀 Я готов помочь вам создать проект! Расскажите подробнее, что именно вы хотите создать? Например:\n\n• ⏰ Будильник или таймер\n• 🧮 Калькулятор\n• 🎮 Игру\n• 📱 Веб-приложение\n\nЧто вас интересует?",
                &[
                    "Создай будильник",
                    "Сделай калькулятор",
                    "Хочу игру",
                    "Покажи примеры",
                ],
            )
        }
    }

    fn build_project(&self, sub_type: &str, description: &str) -> ChatReply {
        let project_name = format!("Проект {}", sub_type);

        let built = self
            .generator
            .synthesize("html", description, &project_name)
            .map_err(|err| err.to_string())
            .and_then(|project| {
                archiver::archive(
                    &self.settings.storage.projects_dir,
                    &self.settings.storage.temp_dir,
                    &project.id.to_string(),
                )
                .map(|_| project)
                .map_err(|err| err.to_string())
            });

        match built {
            Ok(project) => ChatReply::ProjectCreated {
                message: format!(
                    "✅ {} готов!\n\n🎉 Ваш проект успешно создан!\n📦 Проект ID: {}\n⬇️ Вы можете скачать его по кнопке ниже.",
                    description, project.id
                ),
                project_id: project.id.to_string(),
                download_url: self.settings.download_url(&project.id.to_string()),
                suggestions: suggestions(&[
                    "Скачать проект",
                    "Создать другой проект",
                    "Показать код",
                    "Что еще можешь?",
                ]),
            },
            Err(err) => {
                tracing::error!(error = %err, sub_type, "project build failed");
                ChatReply::Error {
                    message: format!("❌ Произошла ошибка при создании проекта: {}", err),
                    suggestions: suggestions(&[
                        "Попробовать еще раз",
                        "Создать другой проект",
                        "Помощь",
                    ]),
                }
            }
        }
    }
}

fn canned(message: &str, follow_ups: &[&str]) -> ChatReply {
    ChatReply::AiResponse {
        message: message.to_string(),
        suggestions: suggestions(follow_ups),
    }
}

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
