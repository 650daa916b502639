//! The site's editable content, as shown in the CMS admin panel.

use cmsconf_core::{
    CmsConfig, Collection, FileCollectionOptions, FileOptions, Settings, TextOptions,
    file_collection, file_collection_entry, image, string, text,
};

/// Collections exposed to editors, in sidebar order.
pub fn collections() -> Vec<Collection> {
    vec![
        file_collection(
            "Conteúdo",
            Some(FileCollectionOptions::named("conteudo")),
            vec![file_collection_entry(
                "SEO",
                None,
                vec![
                    string(
                        "URL",
                        Some(TextOptions {
                            hint: Some(
                                "URL final do site, sem a última barra. Ex: https://exemplo.com.br"
                                    .to_string(),
                            ),
                            ..TextOptions::named("url")
                        }),
                    ),
                    string("Título", Some(TextOptions::named("titulo"))),
                    string("H1", Some(TextOptions::named("h1"))),
                    text("Descrição", Some(TextOptions::named("descricao"))),
                    image(
                        "Imagem de compartilhamento",
                        Some(FileOptions::named("imagem_de_compartilhamento")),
                    ),
                    string("Palavras-chave", Some(TextOptions::named("palavras_chave"))),
                ],
            )],
        )
        .into(),
    ]
}

/// Build the full admin document for the given settings.
pub fn document(settings: &Settings) -> CmsConfig {
    CmsConfig::from_settings(settings, collections())
}
