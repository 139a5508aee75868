use crate::cfg::Mode;
use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

/// The only page whose copy varies by mode.
pub struct WelcomePage {
    mode: Mode,
}

const fn welcome_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => {
            "Welcome to the Slipstream Linux Installer\n\n\
             This wizard will guide you through the installation process."
        }
        Mode::Oem => {
            "OEM Installation Mode\n\n\
             This will prepare the system for OEM deployment.\n\
             The system will be configured for first-boot setup."
        }
        Mode::Recovery => "Recovery Mode\n\nSystem recovery and repair options.",
    }
}

#[relm4::component(pub)]
impl SimpleComponent for WelcomePage {
    type Init = Mode;
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
            set_halign: gtk::Align::Center,

            gtk::Label {
                set_label: welcome_text(model.mode),
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
            },
        }
    }

    fn init(
        mode: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self { mode };
        let widgets = view_output!();

        tracing::debug!(?mode, "welcome page created");

        ComponentParts { model, widgets }
    }
}
