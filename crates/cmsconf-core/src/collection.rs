//! File and folder collections.

use serde::Serialize;

use crate::{
    field::{Field, I18n, impl_named},
    merge::{impl_merge, resolve},
    slug::slugify,
};

/// Root directory for content files written by the CMS.
pub const CONTENT_ROOT: &str = "/content";

/// A top-level collection in the CMS sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Collection {
    /// Fixed set of non-repeatable entries, each with its own shape.
    Files(FileCollection),
    /// Repeatable entries sharing one shape.
    Folder(FolderCollection),
}

impl Collection {
    /// Collection identifier.
    pub fn name(&self) -> &str {
        match self {
            Self::Files(c) => &c.name,
            Self::Folder(c) => &c.name,
        }
    }

    /// Label shown in the editor.
    pub fn label(&self) -> &str {
        match self {
            Self::Files(c) => &c.label,
            Self::Folder(c) => &c.label,
        }
    }
}

impl From<FileCollection> for Collection {
    fn from(collection: FileCollection) -> Self {
        Self::Files(collection)
    }
}

impl From<FolderCollection> for Collection {
    fn from(collection: FolderCollection) -> Self {
        Self::Folder(collection)
    }
}

/// Collection made of distinct, individually shaped files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileCollection {
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub files: Vec<FileCollectionEntry>,
}

/// One file in a [`FileCollection`], e.g. a home or about page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileCollectionEntry {
    pub label: String,
    pub name: String,
    /// Repository path of the backing file.
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18n>,
    pub fields: Vec<Field>,
}

/// Collection of repeatable entries stored as files in one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderCollection {
    pub label: String,
    pub name: String,
    /// Repository folder holding the entries.
    pub folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
    /// Field used to name new entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub fields: Vec<Field>,
}

/// Options for [`file_collection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileCollectionOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Options for [`file_collection_entry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileEntryOptions {
    pub name: Option<String>,
    pub i18n: Option<I18n>,
    /// Overrides the derived `/content/<name>.json` path.
    pub file: Option<String>,
}

/// Options for [`folder_collection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderCollectionOptions {
    pub name: Option<String>,
    /// Overrides the derived `/content/<name>` folder.
    pub folder: Option<String>,
    pub extension: Option<String>,
    pub create: Option<bool>,
    pub identifier_field: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
}

impl_merge!(FileCollectionOptions { name, description });
impl_merge!(FileEntryOptions { name, i18n, file });
impl_merge!(FolderCollectionOptions {
    name,
    folder,
    extension,
    create,
    identifier_field,
    slug,
    description,
    summary
});

impl_named!(
    FileCollectionOptions,
    FileEntryOptions,
    FolderCollectionOptions
);

/// Field assumed to identify folder entries unless overridden.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "titulo";

/// Build a [`FileCollection`] from its entries.
pub fn file_collection(
    label: impl Into<String>,
    options: Option<FileCollectionOptions>,
    files: Vec<FileCollectionEntry>,
) -> FileCollection {
    let label = label.into();
    let o = resolve(options, FileCollectionOptions::default());
    FileCollection {
        name: o.name.unwrap_or_else(|| slugify(&label)),
        description: o.description,
        label,
        files,
    }
}

/// Build a [`FileCollectionEntry`] stored at `/content/<name>.json`.
///
/// The path follows the caller's `name` when one is given.
pub fn file_collection_entry(
    label: impl Into<String>,
    options: Option<FileEntryOptions>,
    fields: Vec<Field>,
) -> FileCollectionEntry {
    let label = label.into();
    let defaults = FileEntryOptions {
        i18n: Some(I18n::Translate),
        ..Default::default()
    };
    let o = resolve(options, defaults);
    let name = o.name.unwrap_or_else(|| slugify(&label));
    FileCollectionEntry {
        file: o
            .file
            .unwrap_or_else(|| format!("{CONTENT_ROOT}/{name}.json")),
        i18n: o.i18n,
        name,
        label,
        fields,
    }
}

/// Build a [`FolderCollection`] stored under `/content/<name>`.
///
/// New entries are JSON files named after the `titulo` field unless the
/// options say otherwise. The folder follows the caller's `name` when one is
/// given.
pub fn folder_collection(
    label: impl Into<String>,
    options: Option<FolderCollectionOptions>,
    fields: Vec<Field>,
) -> FolderCollection {
    let label = label.into();
    let defaults = FolderCollectionOptions {
        extension: Some("json".to_string()),
        create: Some(true),
        identifier_field: Some(DEFAULT_IDENTIFIER_FIELD.to_string()),
        ..Default::default()
    };
    let o = resolve(options, defaults);
    let name = o.name.unwrap_or_else(|| slugify(&label));
    FolderCollection {
        folder: o.folder.unwrap_or_else(|| format!("{CONTENT_ROOT}/{name}")),
        extension: o.extension,
        create: o.create,
        identifier_field: o.identifier_field,
        slug: o.slug,
        description: o.description,
        summary: o.summary,
        name,
        label,
        fields,
    }
}
