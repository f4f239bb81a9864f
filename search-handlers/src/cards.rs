use extbot_core::Card;
use marketplace_client::ExtensionResult;

use crate::messages::{CARD_LINK_LABEL, CARD_PUBLISHER_LABEL};

/// One card per extension: name as title, publisher line, marketplace link, icon as thumbnail.
pub fn extension_card(ext: &ExtensionResult) -> Card {
    Card::new(ext.display_name.as_str())
        .field(CARD_PUBLISHER_LABEL, ext.publisher_display_name.as_str())
        .link(CARD_LINK_LABEL, ext.marketplace_url())
        .thumbnail(ext.icon_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_card() {
        let ext = ExtensionResult {
            display_name: "GitLens".to_string(),
            publisher_display_name: "GitKraken".to_string(),
            publisher_id: "eamodio".to_string(),
            extension_id: "gitlens".to_string(),
            icon_url: Some("https://cdn/gitlens.png".to_string()),
        };

        let card = extension_card(&ext);

        assert_eq!(card.title, "GitLens");
        assert_eq!(card.thumbnail_url.as_deref(), Some("https://cdn/gitlens.png"));
        assert_eq!(
            card.markdown_body(),
            "**Published by:** GitKraken\n**[View on Marketplace](https://marketplace.visualstudio.com/items?itemName=eamodio.gitlens)**"
        );
    }
}
