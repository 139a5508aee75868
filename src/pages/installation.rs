use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

// The fraction is fixed; there is no backend reporting real progress.
const PLACEHOLDER_FRACTION: f64 = 0.45;

pub struct InstallationPage;

#[relm4::component(pub)]
impl SimpleComponent for InstallationPage {
    type Init = ();
    type Input = ();
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 12,
            set_margin_all: 24,
            set_vexpand: true,
            set_hexpand: true,
            set_valign: gtk::Align::Center,

            gtk::Label {
                set_label: "Installing System\n\n\
                            Please wait while the system is being installed...",
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
            },

            gtk::ProgressBar {
                set_fraction: PLACEHOLDER_FRACTION,
                set_text: Some("Installing packages..."),
                set_show_text: true,
                set_size_request: (400, -1),
                set_halign: gtk::Align::Center,
            },
        }
    }

    fn init(
        (): Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self {};
        let widgets = view_output!();

        tracing::debug!("installation page created");

        ComponentParts { model, widgets }
    }
}
