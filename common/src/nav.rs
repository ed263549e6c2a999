// in-page navigation targets, in display order
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

// the collapsible menu shown on narrow screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    // following any link closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_link_closes() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.class(), "nav-links");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "nav-links active");

        menu.close();
        assert!(!menu.is_open());

        menu.close();
        assert!(!menu.is_open());
    }
}
