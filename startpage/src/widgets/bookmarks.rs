use gtk::prelude::*;
use relm4::prelude::*;

use crate::config::Bookmark;

pub struct Bookmarks {
    bookmarks: Vec<Bookmark>,
}

#[derive(Debug)]
pub enum BookmarksMsg {}

#[relm4::component(pub)]
impl SimpleComponent for Bookmarks {
    type Init = Vec<Bookmark>;
    type Input = BookmarksMsg;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 8,
            set_css_classes: &["bookmarks-widget", "widget"],

            gtk::Label {
                set_label: "Bookmarks",
                set_halign: gtk::Align::Start,
                set_css_classes: &["bookmarks-title"],
            },

            #[name = "link_list"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 4,
                set_css_classes: &["bookmarks-list"],
            }
        }
    }

    fn init(
        bookmarks: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Bookmarks { bookmarks };

        let widgets = view_output!();

        // Static list, appended once in store order.
        for bookmark in &model.bookmarks {
            let link = gtk::LinkButton::with_label(&bookmark.url, &bookmark.name);
            link.set_halign(gtk::Align::Start);
            link.set_css_classes(&["bookmark-link"]);
            widgets.link_list.append(&link);
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {}
    }
}
