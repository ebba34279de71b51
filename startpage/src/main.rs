use std::error::Error;

use gtk::prelude::*;
use gtk4_layer_shell::{Edge, Layer, LayerShell};
use relm4::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod widgets;

use config::Config;
use widgets::{Bookmarks, Clock, Search, Weather};

const APP_ID: &str = "com.github.startpage";

struct StartPage {
    clock: Controller<Clock>,
    weather: Controller<Weather>,
    search: Controller<Search>,
    bookmarks: Controller<Bookmarks>,
}

#[derive(Debug)]
enum StartPageMsg {
    // Widgets are independent; no messages are routed through the root.
}

#[relm4::component]
impl SimpleComponent for StartPage {
    type Init = Config;
    type Input = StartPageMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some(&init.title),
            set_css_classes: &["startpage-window"],

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 24,
                set_valign: gtk::Align::Center,
                set_halign: gtk::Align::Center,
                set_css_classes: &["startpage-container"],

                #[local_ref]
                clock_widget -> gtk::Box {},

                #[local_ref]
                weather_widget -> gtk::Box {},

                #[local_ref]
                search_widget -> gtk::Box {},

                #[local_ref]
                bookmarks_widget -> gtk::Box {},
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        // Initialize layer shell BEFORE window is realized
        root.init_layer_shell();

        // Sit underneath regular windows, like a desktop dashboard
        root.set_layer(Layer::Bottom);
        root.set_namespace(Some("startpage"));

        // Cover the whole output
        root.set_anchor(Edge::Top, true);
        root.set_anchor(Edge::Left, true);
        root.set_anchor(Edge::Right, true);
        root.set_anchor(Edge::Bottom, true);

        // Initialize widgets
        let clock = Clock::builder().launch(()).detach();
        let weather = Weather::builder().launch(init.weather.clone()).detach();
        let search = Search::builder().launch(init.search.engine_url.clone()).detach();
        let bookmarks = Bookmarks::builder().launch(init.bookmarks.clone()).detach();

        let model = StartPage {
            clock,
            weather,
            search,
            bookmarks,
        };

        let clock_widget = model.clock.widget();
        let weather_widget = model.weather.widget();
        let search_widget = model.search.widget();
        let bookmarks_widget = model.bookmarks.widget();
        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {}
    }
}

/// Compile SCSS to CSS at runtime
fn compile_scss() -> Result<String, String> {
    let scss_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("theme")
        .join("style.scss");

    grass::from_path(&scss_path, &grass::Options::default())
        .map_err(|e| format!("Failed to compile SCSS:\n{}", e))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    gtk::init()?;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // Compile SCSS to CSS at runtime
    let css = match compile_scss() {
        Ok(css) => css,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // Load compiled CSS
    let css_provider = gtk::CssProvider::new();
    css_provider.load_from_data(&css);

    gtk::style_context_add_provider_for_display(
        &gtk::gdk::Display::default().expect("Could not connect to display"),
        &css_provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let app = RelmApp::new(APP_ID);
    app.run::<StartPage>(config);

    Ok(())
}
