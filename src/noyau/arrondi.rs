// src/noyau/arrondi.rs

/// Nombre de chiffres significatifs utilisé partout pour l’affichage.
pub const CHIFFRES_SIGNIFICATIFS: u32 = 6;

/// Arrondit `v` à `chiffres` chiffres significatifs.
///
/// - 0 reste 0 ; NaN/∞ sont rendus tels quels
/// - arrondi au pair le plus proche sur les cas “.5” exacts
///
/// Passe par l’écriture scientifique décimale (`{:.N e}`) : l’arrondi porte sur la
/// valeur binaire exacte et le résultat relu est le f64 le plus proche du décimal.
/// Aucune puissance de 10 intermédiaire, donc ni ∞ sur les sous-normaux
/// ni erreur d’un ulp (1e-170 reste 1e-170).
pub fn arrondi_significatif(v: f64, chiffres: u32) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return if v == 0.0 { 0.0 } else { v };
    }

    let decimales = chiffres.max(1) as usize - 1;
    format!("{v:.decimales$e}").parse().unwrap_or(v)
}

/// Raccourci : 6 chiffres significatifs.
pub fn arrondi6(v: f64) -> f64 {
    arrondi_significatif(v, CHIFFRES_SIGNIFICATIFS)
}
