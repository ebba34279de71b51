use chrono::{DateTime, Local};
use gtk::glib;
use gtk::prelude::*;
use relm4::prelude::*;

pub struct Clock {
    time_text: String,
    date_text: String,
    tick_source: Option<glib::SourceId>,
}

#[derive(Debug)]
pub enum ClockMsg {
    Tick,
}

#[relm4::component(pub)]
impl SimpleComponent for Clock {
    type Init = ();
    type Input = ClockMsg;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 4,
            set_halign: gtk::Align::Center,
            set_css_classes: &["clock-widget", "widget"],

            gtk::Label {
                #[watch]
                set_label: &model.time_text,
                set_css_classes: &["clock-time"],
            },

            gtk::Label {
                #[watch]
                set_label: &model.date_text,
                set_css_classes: &["clock-date"],
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let now = Local::now();
        let mut model = Clock {
            time_text: format_time(&now),
            date_text: format_date(&now),
            tick_source: None,
        };

        // Set up periodic updates (every second)
        let sender_clone = sender.clone();
        model.tick_source = Some(glib::timeout_add_seconds_local(1, move || {
            sender_clone.input(ClockMsg::Tick);
            glib::ControlFlow::Continue
        }));

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            ClockMsg::Tick => {
                let now = Local::now();
                self.time_text = format_time(&now);
                self.date_text = format_date(&now);
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        // The timeout must not fire into a torn-down component.
        if let Some(source) = self.tick_source.take() {
            source.remove();
        }
    }
}

fn format_time(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

fn format_date(now: &DateTime<Local>) -> String {
    now.format("%A, %-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_time_and_date() {
        let instant = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 30).unwrap();
        assert_eq!(format_time(&instant), "09:05:30");
        assert_eq!(format_date(&instant), "Saturday, 7 March 2026");
    }
}
