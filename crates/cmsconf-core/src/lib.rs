//! cmsconf Core Library
//!
//! Declarative builders for Decap CMS admin configuration: fields, file and
//! folder collections, the root document, and the settings that feed it.
//!
//! ```
//! use cmsconf_core::{TextOptions, file_collection_entry, string, text};
//!
//! let seo = file_collection_entry(
//!     "SEO",
//!     None,
//!     vec![
//!         string("Título", None),
//!         text("Descrição", Some(TextOptions::named("descricao"))),
//!     ],
//! );
//! assert_eq!(seo.file, "/content/seo.json");
//! assert_eq!(seo.fields[0].name, "titulo");
//! ```

pub mod collection;
pub mod components;
pub mod document;
pub mod error;
pub mod field;
pub mod merge;
pub mod settings;
pub mod slug;

pub use collection::{
    Collection, FileCollection, FileCollectionEntry, FileCollectionOptions, FileEntryOptions,
    FolderCollection, FolderCollectionOptions, file_collection, file_collection_entry,
    folder_collection,
};
pub use components::image_alt;
pub use document::{Backend, CmsConfig, I18nSettings, I18nStructure};
pub use error::{CoreError, Result};
pub use field::{
    BooleanOptions, CodeOptions, DatetimeOptions, Field, FileOptions, I18n, ListOptions,
    NumberOptions, ObjectOptions, Pattern, TextOptions, ValueType, Widget, boolean, code,
    datetime, file, image, list, markdown, number, object, string, text,
};
pub use merge::Merge;
pub use settings::{RunMode, ServerSettings, Settings, SiteSettings};
pub use slug::slugify;
