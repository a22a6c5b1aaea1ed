//! The styling and theming showcase.
//!
//! A single full-window view that exercises global themes, local style
//! overrides (including nested ones), the stateful counter/timer widgets and
//! the status log.

use imstack_ui::headless::HeadlessBackend;
use imstack_ui::prelude::*;
use imstack_ui::StateStore;

use crate::config::AppConfig;

/// Messages produced by the demo's widgets
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SetTheme(&'static str),
    Status(String),
    CustomColor(Color),
    SliderChanged(f32),
    NameChanged(String),
    GreetingToggled(bool),
    LivesChanged(i64),
    Hovered,
}

/// Application state for the demo
#[derive(Debug, Clone)]
pub struct StylingDemo {
    user_name: String,
    show_greeting: bool,
    slider_value: f32,
    color_value: Color,
    custom_color: Color,
    lives: i64,
    hover_count: u32,
    status: StatusDisplay,
}

impl StylingDemo {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            user_name: String::new(),
            show_greeting: false,
            slider_value: 50.0,
            color_value: Color::rgb(1.0, 0.5, 0.2),
            custom_color: Color::from_rgb8(100.0, 150.0, 200.0),
            lives: 0,
            hover_count: 0,
            status: status_display()
                .height(config.status_height)
                .max_entries(config.status_max_entries),
        }
    }

    pub fn custom_color(&self) -> Color {
        self.custom_color
    }

    pub fn slider_value(&self) -> f32 {
        self.slider_value
    }

    pub fn lives(&self) -> i64 {
        self.lives
    }

    /// Append to the on-screen status log and echo to the log output
    pub fn log_status(&self, store: &mut StateStore, message: impl Into<String>, now: f64) {
        let message = message.into();
        log::info!("[STATUS] {}", message);
        if let Err(err) = self.status.add_message(store, message, now) {
            log::error!("Status log unavailable: {err}");
        }
    }

    fn theme_buttons(&self) -> Row<Message> {
        row(elements![
            button("Dark Theme").on_click_message(Message::SetTheme("Dark")),
            button("Light Theme").on_click_message(Message::SetTheme("Light")),
            button("Blue Theme").on_click_message(Message::SetTheme("Blue")),
        ])
    }

    fn styled_buttons(&self) -> Vec<Element<Message>> {
        let click = |text: &'static str| move || Message::Status(text.to_string());
        elements![
            style()
                .color(StyleColor::Button, Color::RED)
                .color(StyleColor::Text, Color::WHITE)
                .to(elements![button("Red Button").on_click(click("Red button clicked!"))]),
            style()
                .color(StyleColor::Button, Color::GREEN)
                .color(StyleColor::Text, Color::BLACK)
                .to(elements![button("Green Button").on_click(click("Green button clicked!"))]),
            style()
                .color(StyleColor::Button, self.custom_color)
                .var(StyleVar::FrameRounding, 10.0)
                .to(elements![
                    button("Custom Rounded").on_click(click("Custom styled button clicked!"))
                ]),
        ]
    }

    fn nested_styles(&self) -> Style<Message> {
        style().color(StyleColor::Button, Color::BLUE).to(elements![row(elements![
            button("Blue 1"),
            style()
                .color(StyleColor::Button, Color::YELLOW)
                .color(StyleColor::Text, Color::BLACK)
                .to(elements![button("Yellow Override")]),
            button("Blue 2"),
        ])])
    }

    fn color_customization(&self) -> Row<Message> {
        row(elements![
            column(elements![
                label("Custom Color:"),
                color_edit("Custom", self.color_value).on_change(Message::CustomColor),
            ]),
            column(elements![
                label("Styled Controls:"),
                style()
                    .color(StyleColor::SliderGrab, self.custom_color)
                    .color(StyleColor::SliderGrabActive, self.custom_color)
                    .to(elements![
                        slider("Value", self.slider_value, 0.0, 100.0)
                            .on_change(Message::SliderChanged)
                    ]),
            ]),
        ])
    }

    fn rounding_styles(&self) -> Row<Message> {
        let rounded = |rgb: (f32, f32, f32), rounding: f32, text: &str| {
            style()
                .color(StyleColor::Button, Color::from_rgb8(rgb.0, rgb.1, rgb.2))
                .var(StyleVar::FrameRounding, rounding)
                .to(elements![button(text)])
        };
        row(elements![
            rounded((255.0, 100.0, 100.0), 15.0, "Rounded Red"),
            rounded((100.0, 255.0, 100.0), 0.0, "Square Green"),
            rounded((100.0, 100.0, 255.0), 25.0, "Very Rounded Blue"),
        ])
    }

    fn stateful_section(&self) -> Layout<Message> {
        let mut ctx = Context::new();
        ctx.add(counter("Lives").min(0).max(5).on_change(Message::LivesChanged))
            .add(progress_bar(self.lives as f32 / 5.0).overlay(format!("{} / 5", self.lives)))
            .add(timer("Session"))
            .row(|r| {
                r.add(
                    text_input("Name", self.user_name.clone())
                        .width(200.0)
                        .on_change(Message::NameChanged),
                )
                .add(checkbox("Show greeting", self.show_greeting).on_change(Message::GreetingToggled));
            });
        if self.show_greeting && !self.user_name.is_empty() {
            ctx.label(format!("Hello, {}!", self.user_name));
        }
        ctx.button("Hover me").build();
        ctx.add(event_handler().on_hover(|| Message::Hovered))
            .add(tooltip(format!("Hovered {} times", self.hover_count)));
        ctx.into_layout()
    }

    fn hotkeys(&self) -> Vec<Element<Message>> {
        elements![
            hotkey(Key::Char('d')).ctrl().on_press(|| Message::SetTheme("Dark")),
            hotkey(Key::Char('l')).ctrl().on_press(|| Message::SetTheme("Light")),
            hotkey(Key::Char('b')).ctrl().on_press(|| Message::SetTheme("Blue")),
        ]
    }
}

impl Application for StylingDemo {
    type Message = Message;

    fn title(&self) -> String {
        "Complete Styling System".to_string()
    }

    fn view(&self) -> Element<Message> {
        let mut children = elements![
            label("Complete Styling & Theming System"),
            separator(),
            label("Global Theme Selection:"),
            self.theme_buttons(),
            spacing(),
            label("Individual Widget Styling:"),
        ];
        children.extend(self.styled_buttons());
        children.extend(elements![
            separator(),
            label("Nested Styling:"),
            self.nested_styles(),
            separator(),
            label("Interactive Color Customization:"),
            self.color_customization(),
            separator(),
            label("Advanced Styling:"),
            self.rounding_styles(),
            separator(),
            label("Counters and Timers:"),
            self.stateful_section(),
            separator(),
            label("Event Log:"),
            self.status.clone(),
            spacing(),
            label("Try switching themes to see global styling in action!"),
            label("Individual styled widgets override global theme colors."),
            label("Hotkeys: Ctrl+D / Ctrl+L / Ctrl+B switch themes."),
        ]);
        children.extend(self.hotkeys());

        Element::new(single_window().layout(children))
    }

    fn update(&mut self, message: Message, ctx: &mut UpdateContext<'_>) {
        let now = ctx.time();
        match message {
            Message::SetTheme(name) => match Theme::by_name(name) {
                Some(theme) => {
                    let name = theme.name();
                    ctx.set_theme(theme);
                    self.log_status(ctx.store(), format!("Theme set to: {name}"), now);
                }
                None => log::warn!("Unknown theme requested: {name}"),
            },
            Message::Status(text) => self.log_status(ctx.store(), text, now),
            Message::CustomColor(color) => {
                self.color_value = color;
                self.custom_color = Color::rgb(color.r, color.g, color.b);
                self.log_status(ctx.store(), "Custom color updated!", now);
            }
            Message::SliderChanged(value) => self.slider_value = value,
            Message::NameChanged(name) => self.user_name = name,
            Message::GreetingToggled(show) => self.show_greeting = show,
            Message::LivesChanged(lives) => {
                self.lives = lives;
                self.log_status(ctx.store(), format!("Lives: {lives}"), now);
            }
            Message::Hovered => self.hover_count += 1,
        }
    }
}

/// Scripted interactions for the headless tour, keyed by frame number
pub fn scripted_input(frame: u64, backend: &mut HeadlessBackend) {
    match frame {
        1 => backend.click("Blue Theme"),
        2 => backend.click("Red Button"),
        3 => backend.click("Lives##counter/+"),
        4 => backend.click("Session##timer/Start"),
        5 => backend.set_color("Custom", [0.2, 0.8, 0.4]),
        6 => backend.set_slider("Value", 75.0),
        7 => {
            backend.set_text("Name##input", "Ada");
            backend.toggle("Show greeting");
        }
        8 => backend.hover("Hover me"),
        9 => {
            backend.hold_key(Key::LeftCtrl);
            backend.hold_key(Key::Char('l'));
        }
        10 => {
            backend.release_key(Key::LeftCtrl);
            backend.release_key(Key::Char('l'));
        }
        _ => {}
    }
}
