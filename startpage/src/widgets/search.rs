use gtk::glib;
use gtk::prelude::*;
use relm4::prelude::*;

pub struct Search {
    engine_url: String,
}

#[derive(Debug)]
pub enum SearchMsg {
    Submit(String),
}

#[relm4::component(pub)]
impl SimpleComponent for Search {
    /// Search engine URL prefix the query is appended to.
    type Init = String;
    type Input = SearchMsg;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_halign: gtk::Align::Center,
            set_css_classes: &["search-widget", "widget"],

            gtk::SearchEntry {
                set_placeholder_text: Some("Search"),
                set_width_chars: 40,
                set_css_classes: &["search-entry"],

                connect_activate[sender] => move |entry| {
                    sender.input(SearchMsg::Submit(entry.text().to_string()));
                    entry.set_text("");
                },
            }
        }
    }

    fn init(
        engine_url: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Search { engine_url };
        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            SearchMsg::Submit(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return;
                }

                let url = search_url(&self.engine_url, query);
                gtk::show_uri(None::<&gtk::Window>, &url, gtk::gdk::CURRENT_TIME);
            }
        }
    }
}

fn search_url(engine_url: &str, query: &str) -> String {
    format!("{}{}", engine_url, glib::Uri::escape_string(query, None, false))
}
