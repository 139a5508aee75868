//! The page-navigation state machine.
//!
//! Everything here is pure: the handlers take the current [`Page`] and
//! return an outcome, and [`buttons`] derives the navigation-button
//! presentation from it. The toolkit glue in `main.rs` only applies the
//! results, so the whole transition table is testable without a display.

/// The six wizard steps, in visit order.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    #[default]
    Welcome,
    DiskSelection,
    Partitioning,
    UserSetup,
    Installation,
    Complete,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Welcome,
        Self::DiskSelection,
        Self::Partitioning,
        Self::UserSetup,
        Self::Installation,
        Self::Complete,
    ];

    /// The immediate successor, `None` at the last page.
    pub const fn succ(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::DiskSelection),
            Self::DiskSelection => Some(Self::Partitioning),
            Self::Partitioning => Some(Self::UserSetup),
            Self::UserSetup => Some(Self::Installation),
            Self::Installation => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// The immediate predecessor, `None` at the first page.
    pub const fn pred(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::DiskSelection => Some(Self::Welcome),
            Self::Partitioning => Some(Self::DiskSelection),
            Self::UserSetup => Some(Self::Partitioning),
            Self::Installation => Some(Self::UserSetup),
            Self::Complete => Some(Self::Installation),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NextOutcome {
    /// Show the given page.
    Advance(Page),
    /// The Complete page relabels Next to "Restart"; restarting is an
    /// external collaborator's job, we only signal it.
    RequestRestart,
    /// Nothing to do. Only reachable on Installation, where the button is
    /// disabled anyway; the page leaves via [`on_install_finished`].
    Inert,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BackOutcome {
    /// Show the given page.
    Retreat(Page),
    /// On Welcome the Back button reads "Exit" and closes the application.
    RequestExit,
}

pub const fn on_next(page: Page) -> NextOutcome {
    match page {
        Page::Installation => NextOutcome::Inert,
        Page::Complete => NextOutcome::RequestRestart,
        _ => match page.succ() {
            Some(next) => NextOutcome::Advance(next),
            None => NextOutcome::Inert,
        },
    }
}

pub const fn on_back(page: Page) -> BackOutcome {
    match page.pred() {
        Some(prev) => BackOutcome::Retreat(prev),
        None => BackOutcome::RequestExit,
    }
}

/// The seam for a real installation backend: nothing in this program fires
/// it, but a completion signal lands here and unsticks the Installation page.
pub const fn on_install_finished(page: Page) -> Option<Page> {
    match page {
        Page::Installation => Some(Page::Complete),
        _ => None,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NextStyle {
    Suggested,
    Destructive,
}

impl NextStyle {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Suggested => "suggested-action",
            Self::Destructive => "destructive-action",
        }
    }
}

/// What the two navigation buttons show for a given page.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavButtons {
    pub back_label: &'static str,
    pub next_label: &'static str,
    pub next_enabled: bool,
    pub next_style: NextStyle,
}

pub const fn buttons(page: Page) -> NavButtons {
    NavButtons {
        back_label: match page {
            Page::Welcome => "Exit",
            _ => "Back",
        },
        next_label: match page {
            Page::Installation => "Installing…",
            Page::Complete => "Restart",
            _ => "Next",
        },
        next_enabled: !matches!(page, Page::Installation),
        next_style: match page {
            Page::Complete => NextStyle::Destructive,
            _ => NextStyle::Suggested,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_to_unique_successor() {
        for window in Page::ALL.windows(2) {
            let (from, to) = (window[0], window[1]);
            if from == Page::Installation {
                continue;
            }
            assert_eq!(on_next(from), NextOutcome::Advance(to));
        }
    }

    #[test]
    fn next_is_inert_on_installation() {
        assert_eq!(on_next(Page::Installation), NextOutcome::Inert);
    }

    #[test]
    fn next_requests_restart_on_complete() {
        assert_eq!(on_next(Page::Complete), NextOutcome::RequestRestart);
    }

    #[test]
    fn back_retreats_to_unique_predecessor() {
        for window in Page::ALL.windows(2) {
            let (from, to) = (window[1], window[0]);
            assert_eq!(on_back(from), BackOutcome::Retreat(to));
        }
    }

    #[test]
    fn back_exits_on_welcome() {
        assert_eq!(on_back(Page::Welcome), BackOutcome::RequestExit);
    }

    #[test]
    fn back_label_is_exit_only_on_welcome() {
        for page in Page::ALL {
            let expected = if page == Page::Welcome { "Exit" } else { "Back" };
            assert_eq!(buttons(page).back_label, expected);
        }
    }

    #[test]
    fn next_disabled_only_on_installation() {
        for page in Page::ALL {
            assert_eq!(buttons(page).next_enabled, page != Page::Installation);
        }
    }

    #[test]
    fn next_destructive_only_on_complete() {
        for page in Page::ALL {
            let expected = if page == Page::Complete {
                NextStyle::Destructive
            } else {
                NextStyle::Suggested
            };
            assert_eq!(buttons(page).next_style, expected);
            if page == Page::Complete {
                assert_eq!(buttons(page).next_label, "Restart");
            }
        }
    }

    #[test]
    fn four_nexts_from_welcome_reach_installation() {
        let mut page = Page::Welcome;
        for _ in 0..4 {
            match on_next(page) {
                NextOutcome::Advance(next) => page = next,
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert_eq!(page, Page::Installation);
        assert_eq!(on_next(page), NextOutcome::Inert);
        assert_eq!(on_install_finished(page), Some(Page::Complete));
    }

    #[test]
    fn install_finished_only_fires_from_installation() {
        for page in Page::ALL {
            let expected = (page == Page::Installation).then_some(Page::Complete);
            assert_eq!(on_install_finished(page), expected);
        }
    }

    #[test]
    fn buttons_consistent_after_every_reachable_transition() {
        // Walk forward then backward through the whole wizard, checking the
        // derivation rule after each step.
        let check = |page: Page| {
            let b = buttons(page);
            assert_eq!(b.back_label == "Exit", page == Page::Welcome);
            assert_eq!(!b.next_enabled, page == Page::Installation);
        };
        let mut page = Page::Welcome;
        check(page);
        while let NextOutcome::Advance(next) = on_next(page) {
            page = next;
            check(page);
        }
        page = Page::Complete;
        while let BackOutcome::Retreat(prev) = on_back(page) {
            page = prev;
            check(page);
        }
        assert_eq!(page, Page::Welcome);
    }
}
