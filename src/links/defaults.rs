//! Built-in link tables, used when the config omits them.

use super::entry::LinkEntry;

/// `(name, href, linkTitle, icon)`
type LinkRow = (&'static str, &'static str, &'static str, &'static str);

const SOCIALS: &[LinkRow] = &[
    ("GitHub", "https://github.com/0xdres/", "{title} en GitHub", "IconGitHub"),
    ("X", "https://x.com/avdyen", "{title} en X", "IconBrandX"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/avdyan/",
        "{title} en LinkedIn",
        "IconLinkedin",
    ),
    (
        "Mail",
        "mailto:andres04u@gmail.com",
        "Envia un correo a {title}",
        "IconMail",
    ),
];

const SHARE_LINKS: &[LinkRow] = &[
    (
        "WhatsApp",
        "https://wa.me/?text=",
        "Envia este post por WhatsApp",
        "IconWhatsapp",
    ),
    (
        "Facebook",
        "https://www.facebook.com/sharer.php?u=",
        "Comparte este post en Facebook",
        "IconFacebook",
    ),
    (
        "X",
        "https://x.com/intent/post?url=",
        "Comparte este post en X",
        "IconBrandX",
    ),
    (
        "Telegram",
        "https://t.me/share/url?url=",
        "Comparte este post por Telegram",
        "IconTelegram",
    ),
    (
        "Pinterest",
        "https://pinterest.com/pin/create/button/?url=",
        "Comparte este post en Pinterest",
        "IconPinterest",
    ),
    (
        "Mail",
        "mailto:?subject=See%20this%20post&body=",
        "Envia este post por correo",
        "IconMail",
    ),
];

fn entries(rows: &[LinkRow]) -> Vec<LinkEntry> {
    rows.iter()
        .map(|&(name, href, title, icon)| LinkEntry::new(name, href, title, icon))
        .collect()
}

/// Author profile links.
pub fn default_socials() -> Vec<LinkEntry> {
    entries(SOCIALS)
}

/// Post share actions.
pub fn default_share_links() -> Vec<LinkEntry> {
    entries(SHARE_LINKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkKind;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_builtin_counts() {
        assert_eq!(default_socials().len(), 4);
        assert_eq!(default_share_links().len(), 6);
    }

    #[test]
    fn test_builtin_tables_validate() {
        let mut diag = ConfigDiagnostics::new();
        for (i, entry) in default_socials().iter().enumerate() {
            entry.validate(LinkKind::Identity, i, &mut diag);
        }
        for (i, entry) in default_share_links().iter().enumerate() {
            entry.validate(LinkKind::Share, i, &mut diag);
        }
        assert!(diag.is_empty(), "{diag}");
    }
}
