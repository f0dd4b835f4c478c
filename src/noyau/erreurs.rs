// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau
// ------------------------------
// - ErreurExpression : évaluateur d’expressions (jetons / RPN / éval)
// - ErreurTriangle   : résolution de triangles
// - ErreurCalcul     : enveloppe commune (calculatrices, API externe)
//
// Toutes ces erreurs sont locales : jamais de nouvel essai, le message est
// affiché tel quel par l’UI et l’état précédent (journal, champs) reste intact.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurExpression {
    #[error("caractère invalide: '{0}' (seuls 0-9 . + - * / ( ) e E sont permis)")]
    CaractereInvalide(char),

    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurTriangle {
    #[error("paramètre manquant: {0}")]
    ParametreManquant(&'static str),

    #[error("triangle invalide: {0}")]
    TriangleInvalide(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expression invalide: {0}")]
    Expression(#[from] ErreurExpression),

    #[error(transparent)]
    Triangle(#[from] ErreurTriangle),

    #[error("argument invalide: {0}")]
    ArgumentInvalide(String),

    #[error("paramètre invalide: {0}")]
    ParametreInvalide(String),

    #[error("commande inconnue: {0}")]
    CommandeInconnue(String),
}
