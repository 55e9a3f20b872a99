/// Cyclic selection over a fixed list of options.
///
/// The selected index is always a valid position in the list.
#[derive(Debug, Clone)]
pub struct Menu {
    options: Vec<String>,
    selected: usize,
}

/// The option chosen by [`Menu::select`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MenuSelection<'a> {
    pub index: usize,
    pub label: &'a str,
}

impl Menu {
    /// Creates a menu with the first option highlighted. `None` when `options` is empty.
    pub fn new<I, S>(options: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return None;
        }
        Some(Self { options, selected: 0 })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected]
    }

    /// Highlights the previous option, wrapping from the first to the last.
    pub fn move_up(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(self.options.len() - 1);
        log::info!("menu: selected index {} ({})", self.selected, self.selected_label());
    }

    /// Highlights the next option, wrapping from the last to the first.
    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
        log::info!("menu: selected index {} ({})", self.selected, self.selected_label());
    }

    /// Confirms the highlighted option.
    pub fn select(&self) -> MenuSelection<'_> {
        let selection = MenuSelection {
            index: self.selected,
            label: self.selected_label(),
        };
        log::info!("menu: selected option `{}`", selection.label);
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_menu() -> Menu {
        Menu::new(["Start Game", "Settings", "Exit"]).unwrap()
    }

    #[test]
    fn empty_menu_is_rejected() {
        assert!(Menu::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn starts_on_first_option() {
        let menu = main_menu();
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.selected_label(), "Start Game");
    }

    #[test]
    fn move_up_from_first_wraps_to_last() {
        let mut menu = main_menu();
        menu.move_up();
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn move_down_from_last_wraps_to_first() {
        let mut menu = main_menu();
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.selected_index(), 2);
        menu.move_down();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn single_option_stays_put() {
        let mut menu = Menu::new(["Only"]).unwrap();
        menu.move_up();
        menu.move_down();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn select_reports_index_and_label() {
        let mut menu = main_menu();
        menu.move_up();
        assert_eq!(menu.select(), MenuSelection { index: 2, label: "Exit" });
    }
}
