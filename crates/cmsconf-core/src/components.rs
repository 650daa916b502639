//! Reusable field compositions.

use crate::{
    field::{Field, FileOptions, ObjectOptions, TextOptions, image, object, string},
    merge::resolve,
};

/// Image with alternative text, stored as `{ url, alt }`.
///
/// The object summary shows the alt text unless `options.summary` is set.
pub fn image_alt(label: impl Into<String>, options: Option<ObjectOptions>) -> Field {
    let defaults = ObjectOptions {
        summary: Some("{{alt}}".to_string()),
        ..Default::default()
    };
    object(
        label,
        Some(resolve(options, defaults)),
        vec![
            image("Imagem", Some(FileOptions::named("url"))),
            string("Texto alternativo", Some(TextOptions::named("alt"))),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{I18n, Widget};

    #[test]
    fn test_image_alt_shape() {
        let banner = image_alt("Banner", None);

        assert_eq!(banner.name, "banner");
        assert_eq!(banner.i18n, Some(I18n::Translate));
        let Widget::Object { fields, summary, .. } = &banner.widget else {
            panic!("Expected object widget");
        };
        assert_eq!(summary.as_deref(), Some("{{alt}}"));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "url");
        assert!(matches!(fields[0].widget, Widget::Image { .. }));
        assert_eq!(fields[1].name, "alt");
        assert!(matches!(fields[1].widget, Widget::String { .. }));
    }

    #[test]
    fn test_image_alt_options_win() {
        let hero = image_alt(
            "Imagem principal",
            Some(ObjectOptions {
                summary: Some("{{url}}".to_string()),
                ..ObjectOptions::named("hero")
            }),
        );

        assert_eq!(hero.name, "hero");
        let Widget::Object { summary, .. } = &hero.widget else {
            panic!("Expected object widget");
        };
        assert_eq!(summary.as_deref(), Some("{{url}}"));
    }
}
