/// A selectable item: what to show and what to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub icon_path: String,
    pub cmd: String,
    /// Horizontal scroll of the rendered title, owned by the renderer.
    pub title_offset: i32,
}

impl Entry {
    pub fn new(title: String, icon_path: String, cmd: String) -> Self {
        Entry {
            title,
            icon_path,
            cmd,
            title_offset: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub name: String,
    pub entries: Vec<Entry>,
    pub page: usize,
    pub highlight_position: usize,
    pub rendered: bool,
    /// Index of the menu to return to, filled in by the renderer on navigation.
    pub back: Option<usize>,
    /// Index (in `back`) of the entry that opened this menu.
    pub root_entry: Option<usize>,
}

impl Menu {
    pub fn new(name: &str) -> Self {
        Menu {
            name: name.to_string(),
            entries: Vec::new(),
            page: 0,
            highlight_position: 0,
            rendered: false,
            back: None,
            root_entry: None,
        }
    }

    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn first_entry(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn previous_entry(&self, index: usize) -> Option<&Entry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn next_entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index + 1)
    }
}

pub fn get_menu<'a>(name: &str, menus: &'a [Menu]) -> Option<&'a Menu> {
    menus.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> Entry {
        Entry::new(title.into(), format!("{title}.png"), format!("{title}.sh"))
    }

    #[test]
    fn neighbours() {
        let mut menu = Menu::new("Games");
        menu.entries.push(entry("chess"));
        menu.entries.push(entry("go"));
        menu.entries.push(entry("shogi"));

        assert_eq!(menu.num_entries(), 3);
        assert_eq!(menu.first_entry().map(|e| e.title.as_str()), Some("chess"));
        assert_eq!(menu.previous_entry(0), None);
        assert_eq!(menu.previous_entry(2).map(|e| e.title.as_str()), Some("go"));
        assert_eq!(menu.next_entry(0).map(|e| e.title.as_str()), Some("go"));
        assert_eq!(menu.next_entry(2), None);
    }

    #[test]
    fn lookup_by_name() {
        let menus = vec![Menu::new("Main"), Menu::new("Games")];
        assert_eq!(get_menu("Games", &menus).map(|m| m.name.as_str()), Some("Games"));
        assert!(get_menu("games", &menus).is_none());
        assert!(get_menu("Emulators", &[]).is_none());
    }
}
