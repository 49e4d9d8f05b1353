use std::io::{self, Stdout, Write};

use config::{AppConfig, ControlGeometry};
use iced::advanced::text;
use iced::widget::{self, Button, Container, Row, button, container, horizontal_space, row};
use iced::{Center, Fill, Length, Size, Task, Theme};
use tracing::{debug, info, warn};

pub mod session;
pub mod style;

pub use session::{Clickable, Region, SessionControl};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Activated(SessionControl),
}

/// Launcher window state. `W` is where the buttons print.
pub struct App<W: Write> {
    config: AppConfig,
    console: W,
}

impl<W: Write> App<W> {
    pub fn new(config: AppConfig, console: W) -> Self {
        Self { config, console }
    }

    pub fn title(&self) -> String {
        self.config.title.clone()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Activated(control) => {
                debug!(?control, "session control activated");
                if let Err(e) = control.on_activate(&mut self.console) {
                    warn!("could not write {:?} output: {e}", control);
                }
            }
        }
    }

    pub fn view(&self) -> Row<'_, Message> {
        let mut regions = row![];
        for control in SessionControl::ALL {
            if control.region() == Region::Right {
                regions = regions.push(horizontal_space());
            }
            regions = regions.push(self.region(control));
        }

        regions.height(Fill).align_y(Center)
    }

    fn region(&self, control: SessionControl) -> Container<'_, Message> {
        let geometry = self.config.control;
        container(session_button(control, geometry)).padding([0, geometry.region_padding])
    }
}

fn session_button<'a, Renderer>(
    control: SessionControl,
    geometry: ControlGeometry,
) -> Button<'a, Message, Theme, Renderer>
where
    Renderer: text::Renderer + 'a,
{
    let label = widget::text(control.label())
        .width(Fill)
        .height(Fill)
        .align_x(Center)
        .align_y(Center);

    button(label)
        .width(Length::Fixed(geometry.width))
        .height(Length::Fixed(geometry.height))
        .style(move |theme: &Theme, status: button::Status| {
            style::grooved(theme, status, geometry.border_width)
        })
        .on_press(Message::Activated(control))
}

/// Opens the launcher window and blocks until it is closed.
pub fn run(config: AppConfig) -> iced::Result {
    info!(
        title = %config.title,
        width = config.window_width,
        height = config.window_height,
        "opening launcher window"
    );

    let size = Size::new(config.window_width, config.window_height);
    let resizable = config.resizable;

    iced::application(App::<Stdout>::title, App::<Stdout>::update, App::<Stdout>::view)
        .window_size(size)
        .resizable(resizable)
        .run_with(move || (App::new(config, io::stdout()), Task::none()))
}
