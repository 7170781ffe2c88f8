/// One key hint in the footer.
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

/// Hints shown together, dropped as a unit when space runs out.
pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

impl FooterItem {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: false,
        }
    }

    pub const fn highlighted(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: true,
        }
    }
}
