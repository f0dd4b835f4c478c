//! Noyau de calcul NR
//!
//! Organisation interne :
//! - erreurs.rs      : taxonomie des erreurs (thiserror)
//! - jetons.rs       : normalisation + charset + tokenisation
//! - rpn.rs          : shunting-yard (signes unaires, parenthèses)
//! - eval.rs         : pipeline complet -> f64
//! - arrondi.rs      : arrondi à n chiffres significatifs
//! - format.rs       : affichage (x, :, nombres, lignes de journal)
//! - triangle.rs     : résolution SSS/SAS/ASA/SSA/base+hauteur
//! - fonctions.rs    : factorielle, racine, puissance, premiers, fractions, formes
//! - calculatrices.rs: aiguillage fermé des commandes
//! - journal.rs      : journal des calculs (mémoire)

pub mod arrondi;
pub mod calculatrices;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod journal;
pub mod jetons;
pub mod rpn;
pub mod triangle;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (utilisée par la vue)
pub use eval::evaluer_avec_demarche;
pub use triangle::MethodeTriangle;
