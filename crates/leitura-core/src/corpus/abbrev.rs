//! Abbreviation table: full Portuguese book name -> canonical short code.
//!
//! Loaded once as constant data; 66 entries covering both testaments.

/// Full display name to short code, in canonical reading order.
pub const BOOK_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gênesis", "Gn"),
    ("Êxodo", "Ex"),
    ("Levítico", "Lv"),
    ("Números", "Nm"),
    ("Deuteronômio", "Dt"),
    ("Josué", "Js"),
    ("Juízes", "Jz"),
    ("Rute", "Rt"),
    ("I Samuel", "1Sm"),
    ("II Samuel", "2Sm"),
    ("I Reis", "1Rs"),
    ("II Reis", "2Rs"),
    ("I Crônicas", "1Cr"),
    ("II Crônicas", "2Cr"),
    ("Esdras", "Ed"),
    ("Neemias", "Ne"),
    ("Ester", "Et"),
    ("Jó", "Jó"),
    ("Salmos", "Sl"),
    ("Provérbios", "Pv"),
    ("Eclesiastes", "Ec"),
    ("Cantares", "Ct"),
    ("Isaías", "Is"),
    ("Jeremias", "Jr"),
    ("Lamentações", "Lm"),
    ("Ezequiel", "Ez"),
    ("Daniel", "Dn"),
    ("Oseias", "Os"),
    ("Joel", "Jl"),
    ("Amós", "Am"),
    ("Obadias", "Ob"),
    ("Jonas", "Jn"),
    ("Miquéias", "Mq"),
    ("Naum", "Na"),
    ("Habacuque", "Hc"),
    ("Sofonias", "Sf"),
    ("Ageu", "Ag"),
    ("Zacarias", "Zc"),
    ("Malaquias", "Ml"),
    ("Mateus", "Mt"),
    ("Marcos", "Mc"),
    ("Lucas", "Lc"),
    ("João", "Jo"),
    ("Atos", "At"),
    ("Romanos", "Rm"),
    ("I Coríntios", "1Co"),
    ("II Coríntios", "2Co"),
    ("Gálatas", "Gl"),
    ("Efésios", "Ef"),
    ("Filipenses", "Fp"),
    ("Colossenses", "Cl"),
    ("I Tessalonicenses", "1Ts"),
    ("II Tessalonicenses", "2Ts"),
    ("I Timóteo", "1Tm"),
    ("II Timóteo", "2Tm"),
    ("Tito", "Tt"),
    ("Filemom", "Fm"),
    ("Hebreus", "Hb"),
    ("Tiago", "Tg"),
    ("I Pedro", "1Pe"),
    ("II Pedro", "2Pe"),
    ("I João", "1Jo"),
    ("II João", "2Jo"),
    ("III João", "3Jo"),
    ("Judas", "Jd"),
    ("Apocalipse", "Ap"),
];

/// Short code for a book display name. A name without a known abbreviation
/// is its own identifier.
pub fn abbreviation_for(name: &str) -> &str {
    BOOK_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, code)| *code)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_full_canon() {
        assert_eq!(BOOK_ABBREVIATIONS.len(), 66);
    }

    #[test]
    fn known_names_map_to_codes() {
        assert_eq!(abbreviation_for("Gênesis"), "Gn");
        assert_eq!(abbreviation_for("I Samuel"), "1Sm");
        assert_eq!(abbreviation_for("Apocalipse"), "Ap");
    }

    #[test]
    fn unknown_name_passes_through() {
        assert_eq!(abbreviation_for("Didaqué"), "Didaqué");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = BOOK_ABBREVIATIONS.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 66);
    }
}
