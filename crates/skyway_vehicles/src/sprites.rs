//! # Directional Sprite Sets
//!
//! One banking section of a definition file lists a sprite per compass
//! direction:
//!
//! ```xml
//! <flat>
//!     <N>hover/flat_n.png</N>
//!     <NE>hover/flat_ne.png</NE>
//! </flat>
//! ```
//!
//! Parsing never fails as a whole. Unknown tags are skipped, unresolvable
//! images are kept as empty slots, and a repeated direction replaces the
//! earlier entry.

use std::collections::BTreeMap;

use crate::diagnostics::Diagnostics;
use crate::direction::CompassDirection;
use crate::image::{ImageHandle, ImageResolver};
use crate::markup::MarkupNode;

/// Sprites of one banking state, ordered clockwise from north.
///
/// `None` marks a direction whose image could not be resolved.
pub type SpriteSet = BTreeMap<CompassDirection, Option<ImageHandle>>;

/// Parses the compass-named children of `section` into a [`SpriteSet`].
pub fn parse_directional_sprites<N, R>(
    section: &N,
    images: &R,
    diags: &mut Diagnostics,
) -> SpriteSet
where
    N: MarkupNode,
    R: ImageResolver + ?Sized,
{
    let mut sprites = SpriteSet::new();

    for child in section.child_elements() {
        let Some(dir) = CompassDirection::from_token(child.tag()) else {
            diags.error(format!("Unknown sprite direction \"{}\"", child.tag()));
            continue;
        };

        let sprite_name = child.text().map_or("", str::trim);
        diags.info(format!("Loading image \"{sprite_name}\""));

        let sprite = images.resolve(sprite_name);
        if sprite.is_none() {
            diags.error(format!(
                "Failed to load directional sprite \"{sprite_name}\" for {dir}"
            ));
        }

        if sprites.insert(dir, sprite).is_some() {
            diags.warn(format!(
                "Replacing directional sprite {dir} in <{}>",
                section.tag()
            ));
        }
    }

    sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::image::ImageCatalog;

    fn parse(xml: &str, catalog: &ImageCatalog) -> (SpriteSet, Diagnostics) {
        let doc = roxmltree::Document::parse(xml).unwrap();
        let mut diags = Diagnostics::new();
        let set = parse_directional_sprites(&doc.root_element(), catalog, &mut diags);
        (set, diags)
    }

    #[test]
    fn test_parses_all_sixteen_tokens() {
        let names: Vec<String> = CompassDirection::ALL
            .iter()
            .map(|d| format!("{d}.png"))
            .collect();
        let catalog = ImageCatalog::with_names(names.iter().cloned());
        let body: String = CompassDirection::ALL
            .iter()
            .map(|d| format!("<{d}>{d}.png</{d}>"))
            .collect();

        let (set, diags) = parse(&format!("<flat>{body}</flat>"), &catalog);
        assert_eq!(set.len(), 16);
        assert!(set.values().all(Option::is_some));
        assert!(diags.entries().is_empty());
        assert_eq!(set.keys().copied().collect::<Vec<_>>(), CompassDirection::ALL.to_vec());
    }

    #[test]
    fn test_unknown_direction_is_skipped() {
        let catalog = ImageCatalog::with_names(["n.png", "e.png"]);
        let (set, diags) = parse("<flat><N>n.png</N><UP>x.png</UP><E>e.png</E></flat>", &catalog);

        assert_eq!(set.len(), 2);
        assert!(set.contains_key(&CompassDirection::E));
        assert_eq!(diags.count(Severity::Error), 1);
        assert!(diags.entries()[0].message.contains("UP"));
    }

    #[test]
    fn test_unresolved_image_keeps_empty_slot() {
        let catalog = ImageCatalog::with_names(["n.png"]);
        let (set, diags) = parse("<flat><N>n.png</N><S>gone.png</S><W/></flat>", &catalog);

        assert_eq!(set.len(), 3);
        assert!(set[&CompassDirection::N].is_some());
        assert!(set[&CompassDirection::S].is_none());
        assert!(set[&CompassDirection::W].is_none());
        assert_eq!(diags.count(Severity::Error), 2);
    }

    #[test]
    fn test_duplicate_direction_later_wins() {
        let catalog = ImageCatalog::with_names(["first.png", "second.png"]);
        let (set, diags) = parse("<flat><N>first.png</N><N>second.png</N></flat>", &catalog);

        assert_eq!(set.len(), 1);
        let sprite = set[&CompassDirection::N].as_ref().unwrap();
        assert_eq!(sprite.name, "second.png");
        assert!(diags.count(Severity::Warning) >= 1);
    }
}
