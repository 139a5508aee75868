use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

/// Three radio choices, never read back. "Erase disk" starts active.
pub struct PartitioningPage;

#[relm4::component(pub)]
impl SimpleComponent for PartitioningPage {
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
                set_label: "Partitioning Options\n\nHow would you like to partition the disk?",
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
            },

            #[name(erase)]
            gtk::CheckButton {
                set_label: Some("Erase disk and install"),
                set_active: true,
            },

            #[name(alongside)]
            gtk::CheckButton {
                set_label: Some("Install alongside existing OS"),
            },

            #[name(manual)]
            gtk::CheckButton {
                set_label: Some("Manual partitioning"),
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

        widgets.alongside.set_group(Some(&widgets.erase));
        widgets.manual.set_group(Some(&widgets.erase));

        tracing::debug!("partitioning page created");

        ComponentParts { model, widgets }
    }
}
