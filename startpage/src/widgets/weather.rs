use gtk::prelude::*;
use owm_client::{CurrentWeather, Units, WeatherClient};
use relm4::prelude::*;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::config::WeatherConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherState {
    Loading,
    Loaded(CurrentWeather),
    Unavailable,
}

pub struct Weather {
    state: WeatherState,
    units: Units,
    fetch_task: Option<JoinHandle<()>>,
}

#[derive(Debug)]
pub enum WeatherMsg {
    Loaded(CurrentWeather),
    Failed,
}

#[relm4::component(pub)]
impl SimpleComponent for Weather {
    type Init = WeatherConfig;
    type Input = WeatherMsg;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 8,
            set_halign: gtk::Align::Center,
            set_css_classes: &["weather-widget", "widget"],

            gtk::Label {
                #[watch]
                set_label: &model.description_text(),
                set_css_classes: &["weather-description"],
            },

            gtk::Label {
                set_label: "|",
                set_css_classes: &["weather-separator"],
                #[watch]
                set_visible: matches!(model.state, WeatherState::Loaded(_)),
            },

            gtk::Label {
                #[watch]
                set_label: &model.temperature_text(),
                set_css_classes: &["weather-temperature"],
                #[watch]
                set_visible: matches!(model.state, WeatherState::Loaded(_)),
            },
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let units = config.units;
        let fetch_task = spawn_fetch(config, sender.clone());

        let model = Weather {
            // Without a running fetch there is nothing to wait for.
            state: if fetch_task.is_some() {
                WeatherState::Loading
            } else {
                WeatherState::Unavailable
            },
            units,
            fetch_task,
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            WeatherMsg::Loaded(weather) => {
                self.state = WeatherState::Loaded(weather);
            }
            WeatherMsg::Failed => {
                self.state = WeatherState::Unavailable;
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        // A response landing after teardown must not reach a dead component.
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}

/// Starts the one-shot fetch; `None` when the widget has nothing to fetch
/// (no API key) or the client could not be built.
fn spawn_fetch(config: WeatherConfig, sender: ComponentSender<Weather>) -> Option<JoinHandle<()>> {
    if config.api_key.is_empty() {
        warn!("no weather API key configured, skipping fetch");
        return None;
    }

    let client = match WeatherClient::new(&config.api_key, &config.location, config.units) {
        Ok(client) => client,
        Err(e) => {
            warn!("failed to build weather client: {e}");
            return None;
        }
    };

    Some(relm4::spawn(async move {
        match client.current().await {
            Ok(weather) => sender.input(WeatherMsg::Loaded(weather)),
            Err(e) => {
                warn!("weather fetch failed: {e}");
                sender.input(WeatherMsg::Failed);
            }
        }
    }))
}

impl Weather {
    fn description_text(&self) -> String {
        match &self.state {
            WeatherState::Loading => "…".to_string(),
            WeatherState::Loaded(weather) => weather.description.clone(),
            WeatherState::Unavailable => "weather unavailable".to_string(),
        }
    }

    fn temperature_text(&self) -> String {
        match &self.state {
            WeatherState::Loaded(weather) => weather.temperature_label(self.units),
            WeatherState::Loading | WeatherState::Unavailable => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_with(state: WeatherState) -> Weather {
        Weather {
            state,
            units: Units::Metric,
            fetch_task: None,
        }
    }

    #[test]
    fn loading_shows_placeholder() {
        let widget = widget_with(WeatherState::Loading);
        assert_eq!(widget.description_text(), "…");
        assert_eq!(widget.temperature_text(), "");
    }

    #[test]
    fn loaded_shows_description_and_rounded_temperature() {
        let widget = widget_with(WeatherState::Loaded(CurrentWeather {
            description: "clear sky".to_string(),
            temperature: 21.6,
        }));
        assert_eq!(widget.description_text(), "clear sky");
        assert_eq!(widget.temperature_text(), "22 °C");
    }

    #[test]
    fn unavailable_is_surfaced_to_the_user() {
        let widget = widget_with(WeatherState::Unavailable);
        assert_eq!(widget.description_text(), "weather unavailable");
        assert_eq!(widget.temperature_text(), "");
    }
}
