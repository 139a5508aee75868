use crate::prelude::*;
use relm4::{ComponentParts, ComponentSender, SimpleComponent};

// Placeholder entries; a real installer would enumerate block devices here.
const EXAMPLE_DISKS: [&str; 2] = ["/dev/sda - 500 GB SSD", "/dev/sdb - 1 TB HDD"];

pub struct DiskSelectionPage;

#[relm4::component(pub)]
impl SimpleComponent for DiskSelectionPage {
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
                set_label: "Select Installation Disk\n\n\
                            Choose the disk where you want to install the system.",
                set_halign: gtk::Align::Center,
                set_justify: gtk::Justification::Center,
            },

            gtk::ListBox {
                set_size_request: (-1, 200),

                gtk::ListBoxRow {
                    gtk::Label {
                        set_label: EXAMPLE_DISKS[0],
                    },
                },

                gtk::ListBoxRow {
                    gtk::Label {
                        set_label: EXAMPLE_DISKS[1],
                    },
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

        tracing::debug!("disk selection page created");

        ComponentParts { model, widgets }
    }
}
