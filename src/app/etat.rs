//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (calcul annexe, commande courante,
//! journal, réglages) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing, pas de résolution).
//! - Une erreur ne touche ni au journal ni aux champs saisis.
//! - Réglages bornés (chiffres significatifs).

use crate::noyau::arrondi::CHIFFRES_SIGNIFICATIFS;
use crate::noyau::calculatrices::{Calculatrice, Commande};
use crate::noyau::eval::Demarche;
use crate::noyau::journal::Journal;
use crate::noyau::triangle::MethodeTriangle;

/// Chiffres significatifs affichés par défaut.
pub const CHIFFRES_DEFAUT: u32 = CHIFFRES_SIGNIFICATIFS;

/// Bornes : au-delà de 15, un f64 n’a plus de chiffres fiables.
pub const CHIFFRES_MIN: u32 = 1;
pub const CHIFFRES_MAX: u32 = 15;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- calcul annexe (expression libre) ---
    pub entree: String,
    pub resultat: String, // dernier résultat arrondi (vide si rien)
    pub erreur: String,
    pub demarche: Demarche,
    pub historique: Vec<String>,           // expressions réussies, la plus récente en tête
    pub index_historique: Option<usize>, // None = hors historique (saisie libre)

    // --- commande d’une calculatrice ---
    pub calculatrice: Calculatrice,
    pub commande: usize,
    pub params: Vec<String>,
    pub param_actif: usize, // dernier champ paramètre ayant eu le focus
    pub methode: MethodeTriangle, // paramètre "Méthode" de la commande Triangle
    pub sortie: String,           // texte complet de la dernière commande réussie
    pub erreur_commande: String,

    // --- journal ---
    pub journal: Journal,

    // --- réglages ---
    pub chiffres: u32,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        let calculatrice = Calculatrice::Base;
        let nb = calculatrice.info().commandes[0].parametres.len();
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Vec::new(),
            index_historique: None,
            calculatrice,
            commande: 0,
            params: vec![String::new(); nb],
            param_actif: 0,
            methode: MethodeTriangle::Sss,
            sortie: String::new(),
            erreur_commande: String::new(),
            journal: Journal::default(),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages), journal conservé.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /* ------------------------ Historique du calcul annexe ------------------------ */

    /// Mémorise une expression évaluée avec succès.
    pub fn memoriser(&mut self, expr: impl Into<String>) {
        self.historique.insert(0, expr.into());
        self.index_historique = None;
    }

    /// Flèche haut : expression plus ancienne (reste sur la plus ancienne en bout de liste).
    pub fn historique_precedent(&mut self) {
        let i = self.index_historique.map_or(0, |i| i + 1);
        if let Some(expr) = self.historique.get(i) {
            self.entree = expr.clone();
            self.index_historique = Some(i);
        }
    }

    /// Flèche bas : expression plus récente ; sous la plus récente, entrée vide.
    pub fn historique_suivant(&mut self) {
        match self.index_historique {
            None => {}
            Some(0) => {
                self.index_historique = None;
                self.entree.clear();
            }
            Some(i) => {
                self.index_historique = Some(i - 1);
                self.entree = self.historique[i - 1].clone();
            }
        }
    }

    /// Garde-fou : borne les chiffres significatifs.
    pub fn set_chiffres(&mut self, chiffres: u32) {
        self.chiffres = chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);
    }

    /* ------------------------ Commandes ------------------------ */

    pub fn choisir_calculatrice(&mut self, c: Calculatrice) {
        if c == self.calculatrice {
            return;
        }
        self.calculatrice = c;
        self.choisir_commande(0);
    }

    /// Change de commande : les champs sont remis à vide.
    pub fn choisir_commande(&mut self, i: usize) {
        let n = self.calculatrice.info().commandes.len();
        self.commande = i.min(n.saturating_sub(1));
        self.params = vec![String::new(); self.commande_courante().parametres.len()];
        self.param_actif = 0;
        self.erreur_commande.clear();
    }

    pub fn commande_courante(&self) -> Commande {
        let cmds = self.calculatrice.info().commandes;
        cmds[self.commande.min(cmds.len() - 1)]
    }

    /// Le paramètre "Méthode" vient du sélecteur, pas d’un champ texte.
    pub fn parametre_methode(&self, i: usize) -> bool {
        i == 0 && self.commande_courante().parametres.first() == Some(&"Méthode")
    }

    /// Paramètres tels qu’envoyés à la calculatrice.
    pub fn params_execution(&self) -> Vec<String> {
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if self.parametre_methode(i) {
                    self.methode.etiquette().to_string()
                } else {
                    p.clone()
                }
            })
            .collect()
    }

    /// Succès d’une commande : texte affiché, champs paramètres vidés pour la saisie suivante.
    pub fn set_sortie(&mut self, texte: impl Into<String>) {
        self.sortie = texte.into();
        self.erreur_commande.clear();
        self.params.iter_mut().for_each(String::clear);
    }

    /// Insère le dernier résultat du calcul annexe dans le champ paramètre actif.
    ///
    /// Rend false si rien à insérer ou si le champ actif est le sélecteur de méthode.
    pub fn inserer_resultat_dans_param(&mut self) -> bool {
        if self.resultat.is_empty() || self.parametre_methode(self.param_actif) {
            return false;
        }
        match self.params.get_mut(self.param_actif) {
            Some(p) => {
                p.push_str(&self.resultat);
                true
            }
            None => false,
        }
    }

    pub fn set_erreur_commande(&mut self, msg: impl Into<String>) {
        self.erreur_commande = msg.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chiffres_bornes() {
        let mut app = AppCalc::default();
        app.set_chiffres(0);
        assert_eq!(app.chiffres, CHIFFRES_MIN);
        app.set_chiffres(99);
        assert_eq!(app.chiffres, CHIFFRES_MAX);
        app.reset_total();
        assert_eq!(app.chiffres, CHIFFRES_DEFAUT);
    }

    #[test]
    fn changement_de_commande() {
        let mut app = AppCalc::default();
        app.choisir_calculatrice(Calculatrice::Geometrie);
        assert_eq!(app.commande_courante().nom, "Triangle");
        assert_eq!(app.params.len(), 8);

        app.choisir_commande(1);
        assert_eq!(app.commande_courante().nom, "Cercle");
        assert_eq!(app.params.len(), 1);

        // index hors bornes ramené à la dernière commande
        app.choisir_commande(42);
        assert_eq!(app.commande_courante().nom, "Parallélogramme");
    }

    #[test]
    fn methode_injectee() {
        let mut app = AppCalc::default();
        app.choisir_calculatrice(Calculatrice::Geometrie);
        app.methode = MethodeTriangle::Asa;
        app.params[0] = "ignoré".into();
        app.params[3] = "2".into();
        let p = app.params_execution();
        assert_eq!(p[0], "ASA");
        assert_eq!(p[3], "2");
    }

    #[test]
    fn historique_haut_bas() {
        let mut app = AppCalc::default();
        // bas sans historique : rien
        app.historique_suivant();
        assert_eq!(app.entree, "");

        app.memoriser("1+1");
        app.memoriser("2*3");
        app.entree = "en cours".into();

        app.historique_precedent();
        assert_eq!(app.entree, "2*3");
        app.historique_precedent();
        assert_eq!(app.entree, "1+1");
        // au bout : on reste sur la plus ancienne
        app.historique_precedent();
        assert_eq!(app.entree, "1+1");
        assert_eq!(app.index_historique, Some(1));

        app.historique_suivant();
        assert_eq!(app.entree, "2*3");
        app.historique_suivant();
        assert_eq!(app.entree, "");
        assert_eq!(app.index_historique, None);

        // une nouvelle mémorisation repart du haut
        app.historique_precedent();
        app.memoriser("9:3");
        assert_eq!(app.index_historique, None);
        app.historique_precedent();
        assert_eq!(app.entree, "9:3");
    }

    #[test]
    fn resultat_vers_parametre() {
        let mut app = AppCalc::default();
        app.choisir_calculatrice(Calculatrice::Geometrie);

        // rien à insérer tant que le calcul annexe n’a rien donné
        app.param_actif = 2;
        assert!(!app.inserer_resultat_dans_param());

        app.set_resultat("4.5", Demarche::default());
        assert!(app.inserer_resultat_dans_param());
        assert_eq!(app.params[2], "4.5");

        // jamais dans le sélecteur de méthode
        app.param_actif = 0;
        assert!(!app.inserer_resultat_dans_param());
        assert_eq!(app.params[0], "");

        // index hors bornes : refus sans panique
        app.param_actif = 99;
        assert!(!app.inserer_resultat_dans_param());
    }

    #[test]
    fn champs_vides_apres_succes() {
        let mut app = AppCalc::default();
        app.choisir_calculatrice(Calculatrice::Fonctions);
        app.choisir_commande(2); // Puissance
        app.params = vec!["2".into(), "10".into()];

        app.set_erreur_commande("échec");
        assert_eq!(app.params, vec!["2", "10"]);

        app.set_sortie("Puissance : 2^10 = 1024");
        assert_eq!(app.params, vec!["", ""]);
        assert!(app.erreur_commande.is_empty());
    }

    #[test]
    fn erreur_garde_le_resultat() {
        let mut app = AppCalc::default();
        app.set_resultat("14", Demarche::default());
        app.set_erreur("division par zéro");
        assert_eq!(app.resultat, "14");
        assert_eq!(app.erreur, "division par zéro");
    }
}
