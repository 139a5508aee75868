use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

pub struct CompletePage;

#[relm4::component(pub)]
impl SimpleComponent for CompletePage {
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
                set_label: "Installation Complete!\n\n\
                            The system has been successfully installed.\n\
                            Please restart your computer to boot into the new system.",
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
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

        tracing::debug!("complete page created");

        ComponentParts { model, widgets }
    }
}
