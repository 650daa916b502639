//! Field widgets and their builders.
//!
//! Each builder takes a label, optional typed options and, for containers, the
//! child fields. The field `name` is the caller's when given, otherwise the
//! slug of the label. Remaining options are merged over the builder's defaults
//! (see [`crate::merge`]); keys left unset on both sides are omitted from the
//! serialized output.

use serde::{Serialize, Serializer};

use crate::{
    merge::{impl_merge, resolve},
    slug::slugify,
};

/// How a field behaves across locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I18n {
    /// The value is translated per locale (`true`).
    Translate,
    /// The value is copied from the default locale (`"duplicate"`).
    Duplicate,
    /// The field is only present in the default locale (`"none"`).
    Off,
}

impl Serialize for I18n {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Translate => serializer.serialize_bool(true),
            Self::Duplicate => serializer.serialize_str("duplicate"),
            Self::Off => serializer.serialize_str("none"),
        }
    }
}

/// Numeric representation stored by a `number` widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int,
    Float,
}

/// Validation pattern, serialized as `[regex, message]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern(pub String, pub String);

impl Pattern {
    /// Create a pattern from a regular expression and its error message.
    pub fn new(regex: impl Into<String>, message: impl Into<String>) -> Self {
        Self(regex.into(), message.into())
    }
}

/// A single editable field in a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Label shown in the editor.
    pub label: String,

    /// Widget kind and its widget-specific options.
    #[serde(flatten)]
    pub widget: Widget,

    /// Key under which the value is stored.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
}

impl Field {
    /// Child fields owned by an `object` or `list` widget, in order.
    pub fn children(&self) -> &[Field] {
        match &self.widget {
            Widget::Object { fields, .. } => fields,
            Widget::List {
                field: Some(only), ..
            } => std::slice::from_ref(&**only),
            Widget::List {
                fields: Some(fields),
                ..
            } => fields,
            _ => &[],
        }
    }
}

/// Widget kinds understood by the CMS, tagged as `widget: <kind>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum Widget {
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Markdown {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Boolean {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value_type: Option<ValueType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Datetime {
        #[serde(skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        time_format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        picker_utc: Option<bool>,
    },
    File {
        #[serde(skip_serializing_if = "Option::is_none")]
        choose_url: Option<bool>,
    },
    Image {
        #[serde(skip_serializing_if = "Option::is_none")]
        choose_url: Option<bool>,
    },
    Object {
        fields: Vec<Field>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
    /// A repeatable list. Exactly one of `field` / `fields` is set: a single
    /// child is emitted under `field`, anything else under `fields`.
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<Box<Field>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<Field>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        allow_add: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    Code {
        #[serde(skip_serializing_if = "Option::is_none")]
        default_language: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        allow_language_selection: Option<bool>,
    },
}

/// Options for `string`, `text` and `markdown` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub default: Option<String>,
}

/// Options for `boolean` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub default: Option<bool>,
}

/// Options for `number` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub default: Option<f64>,
    pub value_type: Option<ValueType>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// Options for `datetime` fields. Formats use moment.js tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatetimeOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub format: Option<String>,
    pub picker_utc: Option<bool>,
}

/// Options for `file` and `image` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub choose_url: Option<bool>,
}

/// Options for `object` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub summary: Option<String>,
    pub collapsed: Option<bool>,
}

/// Options for `list` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub summary: Option<String>,
    pub collapsed: Option<bool>,
    pub allow_add: Option<bool>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Options for `code` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeOptions {
    pub name: Option<String>,
    pub required: Option<bool>,
    pub i18n: Option<I18n>,
    pub hint: Option<String>,
    pub pattern: Option<Pattern>,
    pub default_language: Option<String>,
    pub allow_language_selection: Option<bool>,
}

impl_merge!(TextOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    default
});
impl_merge!(BooleanOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    default
});
impl_merge!(NumberOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    default,
    value_type,
    min,
    max,
    step
});
impl_merge!(DatetimeOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    date_format,
    time_format,
    format,
    picker_utc
});
impl_merge!(FileOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    choose_url
});
impl_merge!(ObjectOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    summary,
    collapsed
});
impl_merge!(ListOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    summary,
    collapsed,
    allow_add,
    min,
    max
});
impl_merge!(CodeOptions {
    name,
    required,
    i18n,
    hint,
    pattern,
    default_language,
    allow_language_selection
});

/// Add a `named` shorthand to options structs that carry a `name` key.
macro_rules! impl_named {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                /// Options with only the `name` key set.
                pub fn named(name: impl Into<String>) -> Self {
                    Self {
                        name: Some(name.into()),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

pub(crate) use impl_named;

impl_named!(
    TextOptions,
    BooleanOptions,
    NumberOptions,
    DatetimeOptions,
    FileOptions,
    ObjectOptions,
    ListOptions,
    CodeOptions,
);

/// Default date format shown in the picker.
pub const DEFAULT_DATE_FORMAT: &str = "DD/MM/YYYY";
/// Default time format shown in the picker.
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm";
/// Default storage format (ISO 8601).
pub const DEFAULT_DATETIME_FORMAT: &str = "YYYY-MM-DDTHH:mm:ssZ";

fn leaf_defaults<T: Default + LeafDefaults>(i18n: I18n) -> T {
    T::with_leaf_defaults(Some(false), Some(i18n))
}

trait LeafDefaults {
    fn with_leaf_defaults(required: Option<bool>, i18n: Option<I18n>) -> Self;
}

macro_rules! impl_leaf_defaults {
    ($($ty:ident),+) => {
        $(
            impl LeafDefaults for $ty {
                fn with_leaf_defaults(required: Option<bool>, i18n: Option<I18n>) -> Self {
                    Self {
                        required,
                        i18n,
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_leaf_defaults!(
    TextOptions,
    BooleanOptions,
    NumberOptions,
    DatetimeOptions,
    FileOptions
);

fn text_like(
    label: String,
    options: Option<TextOptions>,
    widget: fn(Option<String>) -> Widget,
) -> Field {
    let o = resolve(options, leaf_defaults(I18n::Translate));
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: widget(o.default),
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

fn file_like(
    label: String,
    options: Option<FileOptions>,
    widget: fn(Option<bool>) -> Widget,
) -> Field {
    let o = resolve(options, leaf_defaults(I18n::Duplicate));
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: widget(o.choose_url),
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// Single-line text field.
pub fn string(label: impl Into<String>, options: Option<TextOptions>) -> Field {
    text_like(label.into(), options, |default| Widget::String { default })
}

/// Multi-line plain text field.
pub fn text(label: impl Into<String>, options: Option<TextOptions>) -> Field {
    text_like(label.into(), options, |default| Widget::Text { default })
}

/// Rich text field stored as markdown.
pub fn markdown(label: impl Into<String>, options: Option<TextOptions>) -> Field {
    text_like(label.into(), options, |default| Widget::Markdown { default })
}

/// Toggle field, defaulting to `false`.
pub fn boolean(label: impl Into<String>, options: Option<BooleanOptions>) -> Field {
    let label = label.into();
    let defaults = BooleanOptions {
        default: Some(false),
        ..leaf_defaults(I18n::Duplicate)
    };
    let o = resolve(options, defaults);
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::Boolean { default: o.default },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// Numeric field, stored as a float starting at `0.0` unless overridden.
pub fn number(label: impl Into<String>, options: Option<NumberOptions>) -> Field {
    let label = label.into();
    let defaults = NumberOptions {
        default: Some(0.0),
        value_type: Some(ValueType::Float),
        ..leaf_defaults(I18n::Duplicate)
    };
    let o = resolve(options, defaults);
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::Number {
            default: o.default,
            value_type: o.value_type,
            min: o.min,
            max: o.max,
            step: o.step,
        },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// Date and time picker. Values are stored as ISO 8601 strings by default.
pub fn datetime(label: impl Into<String>, options: Option<DatetimeOptions>) -> Field {
    let label = label.into();
    let defaults = DatetimeOptions {
        date_format: Some(DEFAULT_DATE_FORMAT.to_string()),
        time_format: Some(DEFAULT_TIME_FORMAT.to_string()),
        format: Some(DEFAULT_DATETIME_FORMAT.to_string()),
        ..leaf_defaults(I18n::Duplicate)
    };
    let o = resolve(options, defaults);
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::Datetime {
            date_format: o.date_format,
            time_format: o.time_format,
            format: o.format,
            picker_utc: o.picker_utc,
        },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// File picker; uploads land in the configured media folder.
pub fn file(label: impl Into<String>, options: Option<FileOptions>) -> Field {
    file_like(label.into(), options, |choose_url| Widget::File { choose_url })
}

/// Image picker; uploads land in the configured media folder.
pub fn image(label: impl Into<String>, options: Option<FileOptions>) -> Field {
    file_like(label.into(), options, |choose_url| Widget::Image { choose_url })
}

/// Group of fields edited together. The summary defaults to the label.
pub fn object(
    label: impl Into<String>,
    options: Option<ObjectOptions>,
    fields: Vec<Field>,
) -> Field {
    let label = label.into();
    let defaults = ObjectOptions {
        i18n: Some(I18n::Translate),
        summary: Some(label.clone()),
        ..Default::default()
    };
    let o = resolve(options, defaults);
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::Object {
            fields,
            summary: o.summary,
            collapsed: o.collapsed,
        },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// Repeatable list of items made of one or more fields.
///
/// With exactly one child the item is that field itself (`field`), otherwise
/// each item is an object of all children (`fields`).
pub fn list(label: impl Into<String>, options: Option<ListOptions>, fields: Vec<Field>) -> Field {
    let label = label.into();
    let defaults = ListOptions {
        i18n: Some(I18n::Translate),
        summary: Some(label.clone()),
        ..Default::default()
    };
    let o = resolve(options, defaults);
    let (field, fields) = match <[Field; 1]>::try_from(fields) {
        Ok([only]) => (Some(Box::new(only)), None),
        Err(fields) => (None, Some(fields)),
    };
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::List {
            field,
            fields,
            summary: o.summary,
            collapsed: o.collapsed,
            allow_add: o.allow_add,
            min: o.min,
            max: o.max,
        },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

/// Code editor field, HTML by default with the language locked.
pub fn code(label: impl Into<String>, options: Option<CodeOptions>) -> Field {
    let label = label.into();
    let defaults = CodeOptions {
        i18n: Some(I18n::Duplicate),
        default_language: Some("html".to_string()),
        allow_language_selection: Some(false),
        ..Default::default()
    };
    let o = resolve(options, defaults);
    Field {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        widget: Widget::Code {
            default_language: o.default_language,
            allow_language_selection: o.allow_language_selection,
        },
        required: o.required,
        i18n: o.i18n,
        hint: o.hint,
        pattern: o.pattern,
        label,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json(field: &Field) -> serde_json::Value {
        serde_json::to_value(field).expect("serialize field")
    }

    #[test]
    fn test_string_defaults() {
        assert_eq!(
            to_json(&string("Título", None)),
            json!({
                "label": "Título",
                "widget": "string",
                "name": "titulo",
                "required": false,
                "i18n": true,
            })
        );
    }

    #[test]
    fn test_text_and_markdown_share_string_defaults() {
        let text = to_json(&text("Descrição", None));
        assert_eq!(text["widget"], "text");
        assert_eq!(text["name"], "descricao");
        assert_eq!(text["i18n"], true);

        let body = to_json(&markdown("Corpo do texto", None));
        assert_eq!(body["widget"], "markdown");
        assert_eq!(body["name"], "corpo_do_texto");
        assert_eq!(body["required"], false);
    }

    #[test]
    fn test_caller_options_override_defaults() {
        let field = string(
            "URL",
            Some(TextOptions {
                required: Some(true),
                hint: Some("URL final do site".to_string()),
                ..TextOptions::named("url")
            }),
        );

        assert_eq!(
            to_json(&field),
            json!({
                "label": "URL",
                "widget": "string",
                "name": "url",
                "required": true,
                "i18n": true,
                "hint": "URL final do site",
            })
        );
    }

    #[test]
    fn test_i18n_override() {
        let field = string(
            "Código interno",
            Some(TextOptions {
                i18n: Some(I18n::Off),
                ..Default::default()
            }),
        );
        assert_eq!(to_json(&field)["i18n"], "none");
        assert_eq!(field.name, "codigo_interno");
    }

    #[test]
    fn test_pattern_serializes_as_pair() {
        let field = string(
            "CEP",
            Some(TextOptions {
                pattern: Some(Pattern::new(r"^\d{5}-\d{3}$", "Formato 00000-000")),
                ..Default::default()
            }),
        );
        assert_eq!(
            to_json(&field)["pattern"],
            json!([r"^\d{5}-\d{3}$", "Formato 00000-000"])
        );
    }

    #[test]
    fn test_boolean_defaults() {
        assert_eq!(
            to_json(&boolean("Mostrar no rodapé", None)),
            json!({
                "label": "Mostrar no rodapé",
                "widget": "boolean",
                "default": false,
                "name": "mostrar_no_rodape",
                "required": false,
                "i18n": "duplicate",
            })
        );
    }

    #[test]
    fn test_number_defaults_and_overrides() {
        let price = to_json(&number("Preço", None));
        assert_eq!(price["widget"], "number");
        assert_eq!(price["default"], 0.0);
        assert_eq!(price["value_type"], "float");
        assert_eq!(price["i18n"], "duplicate");
        assert!(price.get("min").is_none());

        let stock = to_json(&number(
            "Estoque",
            Some(NumberOptions {
                value_type: Some(ValueType::Int),
                min: Some(0.0),
                ..Default::default()
            }),
        ));
        assert_eq!(stock["value_type"], "int");
        assert_eq!(stock["min"], 0.0);
        assert_eq!(stock["default"], 0.0);
    }

    #[test]
    fn test_datetime_defaults() {
        let field = to_json(&datetime("Data e hora", None));
        assert_eq!(field["widget"], "datetime");
        assert_eq!(field["name"], "data_e_hora");
        assert_eq!(field["date_format"], "DD/MM/YYYY");
        assert_eq!(field["time_format"], "HH:mm");
        assert_eq!(field["format"], "YYYY-MM-DDTHH:mm:ssZ");
        assert_eq!(field["required"], false);
        assert_eq!(field["i18n"], "duplicate");
    }

    #[test]
    fn test_file_and_image_defaults() {
        assert_eq!(
            to_json(&image("Banner", None)),
            json!({
                "label": "Banner",
                "widget": "image",
                "name": "banner",
                "required": false,
                "i18n": "duplicate",
            })
        );
        assert_eq!(to_json(&file("Catálogo", None))["name"], "catalogo");
    }

    #[test]
    fn test_object_defaults() {
        let field = object(
            "Informações de contato",
            None,
            vec![string("Telefone", None), string("E-mail", None)],
        );

        let json = to_json(&field);
        assert_eq!(json["widget"], "object");
        assert_eq!(json["name"], "informacoes_de_contato");
        assert_eq!(json["summary"], "Informações de contato");
        assert_eq!(json["i18n"], true);
        assert!(json.get("required").is_none());
        assert_eq!(json["fields"][0]["name"], "telefone");
        assert_eq!(json["fields"][1]["name"], "e_mail");
        assert_eq!(field.children().len(), 2);
    }

    #[test]
    fn test_list_with_one_child_collapses_to_field() {
        let field = list("Itens", None, vec![string("Item", None)]);

        let json = to_json(&field);
        assert_eq!(json["widget"], "list");
        assert_eq!(json["field"]["name"], "item");
        assert!(json.get("fields").is_none());
        assert_eq!(json["summary"], "Itens");
        assert_eq!(field.children().len(), 1);
    }

    #[test]
    fn test_list_with_many_children_keeps_order() {
        let a = string("Título", None);
        let b = image("Ícone", None);
        let field = list("Benefícios", None, vec![a.clone(), b.clone()]);

        let json = to_json(&field);
        assert!(json.get("field").is_none());
        assert_eq!(json["fields"], json!([to_json(&a), to_json(&b)]));
        assert_eq!(field.children(), &[a, b]);
    }

    #[test]
    fn test_list_with_no_children_keeps_empty_fields() {
        let json = to_json(&list("Vazia", None, Vec::new()));
        assert_eq!(json["fields"], json!([]));
    }

    #[test]
    fn test_list_summary_override() {
        let field = list(
            "Depoimentos",
            Some(ListOptions {
                summary: Some("{{fields.nome}}".to_string()),
                max: Some(6),
                ..Default::default()
            }),
            vec![string("Nome", None), text("Texto", None)],
        );

        let json = to_json(&field);
        assert_eq!(json["summary"], "{{fields.nome}}");
        assert_eq!(json["max"], 6);
        assert_eq!(json["name"], "depoimentos");
    }

    #[test]
    fn test_code_defaults() {
        assert_eq!(
            to_json(&code("Script de rastreamento", None)),
            json!({
                "label": "Script de rastreamento",
                "widget": "code",
                "default_language": "html",
                "allow_language_selection": false,
                "name": "script_de_rastreamento",
                "i18n": "duplicate",
            })
        );
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(string("Título", None).children().is_empty());
    }
}
