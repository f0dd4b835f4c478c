// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Trois zones :
// - Calcul annexe : expression libre, pavé, démarche (jetons + RPN)
// - Calculatrices : choix calculatrice/commande, paramètres, exécution
// - Journal : toutes les lignes "<calcul>: <résultat>"
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;
use log::warn;

use super::etat::{AppCalc, CHIFFRES_MAX, CHIFFRES_MIN};
use crate::noyau::arrondi::arrondi_significatif;
use crate::noyau::calculatrices::Calculatrice;
use crate::noyau::format::{affichage_expression, format_nombre};
use crate::noyau::{evaluer_avec_demarche, MethodeTriangle};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice NR");
                ui.add_space(6.0);

                self.ui_calculatrices(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);
                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
            });
    }

    /* ------------------------ Calculatrices ------------------------ */

    fn ui_calculatrices(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Calculatrice :");
            let mut choix = self.calculatrice;
            egui::ComboBox::from_id_salt("choix_calculatrice")
                .selected_text(choix.info().nom)
                .show_ui(ui, |ui| {
                    for c in Calculatrice::TOUTES {
                        ui.selectable_value(&mut choix, c, c.info().nom);
                    }
                });
            self.choisir_calculatrice(choix);

            ui.label("Commande :");
            let mut i = self.commande;
            let commandes = self.calculatrice.info().commandes;
            egui::ComboBox::from_id_salt("choix_commande")
                .selected_text(self.commande_courante().nom)
                .show_ui(ui, |ui| {
                    for (k, cmd) in commandes.iter().enumerate() {
                        ui.selectable_value(&mut i, k, cmd.nom);
                    }
                });
            if i != self.commande {
                self.choisir_commande(i);
            }
        });

        ui.add_space(6.0);

        let cmd = self.commande_courante();
        self.params.resize(cmd.parametres.len(), String::new());

        egui::Grid::new("parametres_commande")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (i, nom) in cmd.parametres.iter().enumerate() {
                    ui.label(format!("{nom} :"));
                    if self.parametre_methode(i) {
                        let mut m = self.methode;
                        egui::ComboBox::from_id_salt("methode_triangle")
                            .selected_text(m.libelle())
                            .show_ui(ui, |ui| {
                                for mm in MethodeTriangle::TOUTES {
                                    ui.selectable_value(&mut m, mm, mm.libelle());
                                }
                            });
                        self.methode = m;
                    } else {
                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut self.params[i])
                                .desired_width(180.0)
                                .id_salt(("param", i)),
                        );
                        if resp.has_focus() {
                            self.param_actif = i;
                        }
                    }
                    ui.end_row();
                }
            });

        if self.parametre_methode(0) {
            ui.small(format!(
                "Champs requis : {}",
                self.methode.champs_requis().join(", ")
            ));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_sized([96.0, 30.0], egui::Button::new("Calculer"))
                .clicked()
            {
                self.executer_commande();
            }
            if ui
                .add_sized([96.0, 30.0], egui::Button::new("Effacer"))
                .on_hover_text("Vide les paramètres de la commande")
                .clicked()
            {
                let i = self.commande;
                self.choisir_commande(i);
            }
        });

        if !self.erreur_commande.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur_commande);
        } else if !self.sortie.is_empty() {
            Self::champ_monospace(ui, "sortie_commande", &self.sortie, 2);
        }
    }

    /// Exécute la commande courante ; seul un succès touche au journal.
    fn executer_commande(&mut self) {
        let cmd = self.commande_courante();
        let params = self.params_execution();
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();

        match self.calculatrice.executer(cmd.nom, &refs) {
            Ok((texte, valeur)) => {
                self.journal.ajouter(texte.clone(), valeur.texte());
                self.set_sortie(texte);
            }
            Err(e) => {
                warn!("{} refusé : {e}", cmd.nom);
                self.set_erreur_commande(e.to_string());
            }
        }
    }

    /* ------------------------ Calcul annexe ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Calcul annexe :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3x4, (1,5-0,5):2, 3*-2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ a le focus
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        // Flèches haut/bas : historique des expressions réussies
        if resp.has_focus() {
            let (haut, bas) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowUp),
                    i.key_pressed(egui::Key::ArrowDown),
                )
            });
            if haut {
                self.historique_precedent();
            } else if bas {
                self.historique_suivant();
            }
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut d = self.chiffres;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(CHIFFRES_MIN..=CHIFFRES_MAX)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d);
            }
        });

        ui.add_space(8.0);
        self.ui_pave_numerique(ui);

        ui.add_space(6.0);
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_annexe", &self.resultat, 1);

        let vers_param = ui
            .add_enabled(
                !self.resultat.is_empty(),
                egui::Button::new("Résultat → paramètre actif"),
            )
            .on_hover_text("Insère le résultat dans le dernier champ paramètre sélectionné");
        if vers_param.clicked() && !self.inserer_resultat_dans_param() {
            warn!("aucun champ paramètre actif pour recevoir le résultat");
        }

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_nr")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, ":");
                self.bouton_insert(ui, "(");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "x");
                self.bouton_insert(ui, ")");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ",");
                self.bouton_action(ui, "Ans", "Insère le dernier résultat", Action::Reprendre);
                self.bouton_insert(ui, "+");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.eval_via_noyau();
                }
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    /* ------------------------ Journal ------------------------ */

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Journal ({})", self.journal.len()))
            .default_open(true)
            .show(ui, |ui| {
                if self.journal.is_empty() {
                    ui.weak("aucun calcul");
                } else {
                    for ligne in self.journal.lignes() {
                        ui.monospace(ligne);
                    }
                }
                ui.add_space(4.0);
                if ui.button("Vider le journal").clicked() {
                    self.journal.vider();
                }
            });
    }

    /* ------------------------ Briques ------------------------ */

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
                Action::Reprendre => {
                    let r = self.resultat.clone();
                    self.entree.push_str(&r);
                }
            }
            self.focus_entree = true;
        }
    }

    /// Les glyphes x, : et la virgule sont acceptés tels quels par le noyau.
    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.entree.push_str(symbole);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, arrondit, dépose résultat + démarche et journalise.
    ///
    /// Entrée vide (ou blanche) : rien n’est fait, ni résultat ni ligne de journal.
    fn eval_via_noyau(&mut self) {
        let expr = self.entree.trim().to_string();
        if expr.is_empty() {
            self.focus_entree = true;
            return;
        }

        match evaluer_avec_demarche(&expr) {
            Ok((v, d)) => {
                let r = format_nombre(arrondi_significatif(v, self.chiffres));
                self.journal.ajouter(
                    format!("Calcul annexe : {}", affichage_expression(&expr)),
                    r.clone(),
                );
                self.set_resultat(r, d);
                self.memoriser(expr);
            }
            Err(e) => {
                warn!("calcul annexe refusé ({:?}) : {e}", self.entree);
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
    Reprendre,
}
