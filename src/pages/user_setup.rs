use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

/// Account form. The entries are inert; nothing reads them back.
pub struct UserSetupPage;

#[relm4::component(pub)]
impl SimpleComponent for UserSetupPage {
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

            gtk::Label {
                set_label: "Create User Account\n\nSet up your user account for the new system.",
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
            },

            gtk::Grid {
                set_row_spacing: 12,
                set_column_spacing: 12,
                set_halign: gtk::Align::Center,

                attach[0, 0, 1, 1] = &gtk::Label {
                    set_label: "Full Name:",
                },
                attach[1, 0, 1, 1] = &gtk::Entry {
                    set_size_request: (250, -1),
                },

                attach[0, 1, 1, 1] = &gtk::Label {
                    set_label: "Username:",
                },
                attach[1, 1, 1, 1] = &gtk::Entry {},

                attach[0, 2, 1, 1] = &gtk::Label {
                    set_label: "Password:",
                },
                attach[1, 2, 1, 1] = &gtk::Entry {
                    set_visibility: false,
                },
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

        tracing::debug!("user setup page created");

        ComponentParts { model, widgets }
    }
}
