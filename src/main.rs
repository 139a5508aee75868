#![warn(rust_2018_idioms)]
mod cfg;
mod chrome;
mod navigator;
mod pages;
mod prelude;
mod system;

use crate::prelude::*;
use cfg::InstallerConfig;
use chrome::{Presentation, WindowChrome};
use color_eyre::Result;
use navigator::{BackOutcome, NextOutcome};
use pages::{
    complete::CompletePage, disk_selection::DiskSelectionPage, installation::InstallationPage,
    partitioning::PartitioningPage, user_setup::UserSetupPage, welcome::WelcomePage,
};
use relm4::{ComponentParts, ComponentSender, RelmApp, SimpleComponent};

const APP_ID: &str = "org.slipstream.Installer";

struct AppModel {
    page: Page,
    chrome: WindowChrome,
    welcome_page: Controller<WelcomePage>,
    disk_selection_page: Controller<DiskSelectionPage>,
    partitioning_page: Controller<PartitioningPage>,
    user_setup_page: Controller<UserSetupPage>,
    installation_page: Controller<InstallationPage>,
    complete_page: Controller<CompletePage>,
}

#[derive(Debug)]
enum AppMsg {
    Next,
    Back,
}

#[relm4::component]
impl SimpleComponent for AppModel {
    type Init = InstallerConfig;
    type Input = AppMsg;
    type Output = ();

    view! {
        gtk::ApplicationWindow {
            set_title: Some(model.chrome.title),
            add_css_class: model.chrome.css_class,
            set_vexpand: true,

            gtk::Box {
                set_vexpand: true,
                set_orientation: gtk::Orientation::Vertical,

                gtk::Box {
                    set_vexpand: true,

                    #[transition = "SlideLeftRight"]
                    match model.page {
                        Page::Welcome => *model.welcome_page.widget(),
                        Page::DiskSelection => *model.disk_selection_page.widget(),
                        Page::Partitioning => *model.partitioning_page.widget(),
                        Page::UserSetup => *model.user_setup_page.widget(),
                        Page::Installation => *model.installation_page.widget(),
                        Page::Complete => *model.complete_page.widget(),
                    }
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 12,
                    set_halign: gtk::Align::End,
                    set_margin_bottom: 24,
                    set_margin_start: 24,
                    set_margin_end: 24,

                    gtk::Button {
                        #[watch]
                        set_label: navigator::buttons(model.page).back_label,
                        connect_clicked => AppMsg::Back,
                    },

                    gtk::Button {
                        #[watch]
                        set_label: navigator::buttons(model.page).next_label,
                        #[watch]
                        set_sensitive: navigator::buttons(model.page).next_enabled,
                        #[watch]
                        set_css_classes: &[navigator::buttons(model.page).next_style.css_class()],
                        connect_clicked => AppMsg::Next,
                    },
                }
            }
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self {
            page: Page::default(),
            chrome: WindowChrome::for_config(&config),
            welcome_page: WelcomePage::builder().launch(config.mode).detach(),
            disk_selection_page: DiskSelectionPage::builder().launch(()).detach(),
            partitioning_page: PartitioningPage::builder().launch(()).detach(),
            user_setup_page: UserSetupPage::builder().launch(()).detach(),
            installation_page: InstallationPage::builder().launch(()).detach(),
            complete_page: CompletePage::builder().launch(()).detach(),
        };

        let widgets = view_output!();

        match model.chrome.presentation {
            Presentation::Fullscreen => root.fullscreen(),
            Presentation::Windowed { width, height } => root.set_default_size(width, height),
        }

        tracing::debug!(chrome = ?model.chrome, "main window set up");

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Next => match navigator::on_next(self.page) {
                NextOutcome::Advance(next) => {
                    tracing::debug!(from = ?self.page, to = ?next, "next clicked");
                    self.page = next;
                    if next == Page::Installation {
                        system::begin_install();
                    }
                }
                NextOutcome::RequestRestart => system::request_restart(),
                NextOutcome::Inert => {}
            },
            AppMsg::Back => match navigator::on_back(self.page) {
                BackOutcome::Retreat(prev) => {
                    tracing::debug!(from = ?self.page, to = ?prev, "back clicked");
                    self.page = prev;
                }
                BackOutcome::RequestExit => {
                    tracing::info!("exit requested from welcome page");
                    relm4::main_application().quit();
                }
            },
        }
    }
}

fn main() -> Result<()> {
    let config = cfg::from_env();

    if config.show_version {
        println!("{}", cfg::VERSION_LINE);
        println!(
            "Built with GTK {}.{}.{}",
            gtk::major_version(),
            gtk::minor_version(),
            gtk::micro_version()
        );
        return Ok(());
    }
    if config.show_help {
        println!("{}", cfg::USAGE);
        return Ok(());
    }

    setup_logs(config.debug)?;
    tracing::debug!(?config, "starting slipstream");

    RelmApp::new(APP_ID).run::<AppModel>(config);
    Ok(())
}

/// Timestamped logging to stdout; `--debug` raises the default level to
/// DEBUG, `RUST_LOG` overrides everything.
fn setup_logs(debug: bool) -> Result<()> {
    color_eyre::install()?;

    let default_level = if debug {
        tracing::level_filters::LevelFilter::DEBUG
    } else {
        tracing::level_filters::LevelFilter::INFO
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
