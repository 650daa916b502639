//! Identifier derivation from human-readable labels.

/// Separator placed between words of a slug.
pub const SEPARATOR: char = '_';

/// Derive a machine-safe identifier from a label.
///
/// A few symbols are spelled out (`&` becomes `and`, `♥` becomes `love`),
/// non-ASCII letters are folded to their closest ASCII form, the text is
/// lowercased, whitespace and separator punctuation become single underscores,
/// and any other character outside `[a-z0-9]` is dropped.
///
/// The function is total: an empty or all-punctuation label yields `""`.
///
/// ```
/// use cmsconf_core::slugify;
///
/// assert_eq!(slugify("Título"), "titulo");
/// assert_eq!(slugify("Palavras-chave"), "palavras_chave");
/// ```
pub fn slugify(label: &str) -> String {
    let mut expanded = String::with_capacity(label.len());
    for c in label.chars() {
        match symbol_name(c) {
            Some(name) => expanded.push_str(name),
            None => expanded.push(c),
        }
    }
    let folded = deunicode::deunicode(&expanded);

    folded
        .to_ascii_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if is_word_break(c) {
                Some(' ')
            } else {
                None
            }
        })
        .collect::<String>()
        .split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Symbols spelled out in place, without surrounding word breaks.
fn symbol_name(c: char) -> Option<&'static str> {
    let name = match c {
        '$' => "dollar",
        '%' => "percent",
        '&' => "and",
        '<' => "less",
        '>' => "greater",
        '|' => "or",
        '¢' => "cent",
        '£' => "pound",
        '¤' => "currency",
        '¥' => "yen",
        '©' => "c",
        '®' => "r",
        '€' => "euro",
        '™' => "tm",
        '∆' => "delta",
        '∑' => "sum",
        '∞' => "infinity",
        '♥' => "love",
        _ => return None,
    };
    Some(name)
}

fn is_word_break(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '-' | '_' | '.' | '/' | '\\' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Título"), "titulo");
        assert_eq!(slugify("Conteúdo"), "conteudo");
        assert_eq!(slugify("Descrição"), "descricao");
        assert_eq!(slugify("Benefícios"), "beneficios");
    }

    #[test]
    fn test_slugify_joins_words_with_underscore() {
        assert_eq!(
            slugify("Imagem de compartilhamento"),
            "imagem_de_compartilhamento"
        );
        assert_eq!(slugify("Palavras-chave"), "palavras_chave");
        assert_eq!(slugify("Data e hora"), "data_e_hora");
    }

    #[test]
    fn test_slugify_trims_and_collapses_separators() {
        assert_eq!(slugify("  --Hello,  World!--  "), "hello_world");
        assert_eq!(slugify("__a__b__"), "a_b");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("H1"), "h1");
        assert_eq!(slugify("Preço (R)"), "preco_r");
        assert_eq!(slugify("it's"), "its");
    }

    #[test]
    fn test_slugify_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!?#*"), "");
    }

    #[test]
    fn test_slugify_spells_out_symbols() {
        assert_eq!(slugify("Rust & Go"), "rust_and_go");
        assert_eq!(slugify("i ♥ u"), "i_love_u");
        assert_eq!(slugify("Desconto 10%"), "desconto_10percent");
        assert_eq!(slugify("Preço (R$)"), "preco_rdollar");
        assert_eq!(slugify("Preço €"), "preco_euro");
        assert_eq!(slugify("a|b"), "aorb");
    }

    #[test]
    fn test_slugify_is_deterministic_and_ascii() {
        for label in ["SEO", "Mostrar no rodapé", "Ünïcödé Ståff", "Ação 2024/01"] {
            let first = slugify(label);
            assert_eq!(first, slugify(label));
            assert!(
                first
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEPARATOR)
            );
            assert!(!first.starts_with(SEPARATOR));
            assert!(!first.ends_with(SEPARATOR));
        }
    }
}
