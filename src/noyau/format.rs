// src/noyau/format.rs
//
// Affichage des résultats (texte “journal”)

/// Forme d’affichage d’une expression : `*` -> `x`, `/` -> `:`.
pub fn affichage_expression(s: &str) -> String {
    s.trim().replace('*', "x").replace('/', ":")
}

/// Nombre -> texte court (pas de “-0”, pas de “.0” superflu).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Ligne de journal : "<affichage>: <résultat>".
pub fn ligne_journal(affichage: &str, resultat: &str) -> String {
    format!("{affichage}: {resultat}")
}
