// src/noyau/journal.rs
//
// Journal des calculs (en mémoire seulement, pas de fichier).
// Un séparateur "--- jj.mm.aaaa ---" précède le premier calcul de chaque jour.

use chrono::{Local, NaiveDate};
use log::info;

use super::format::ligne_journal;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntreeJournal {
    pub calcul: String,
    pub resultat: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Element {
    Date(NaiveDate),
    Calcul(EntreeJournal),
}

#[derive(Clone, Debug, Default)]
pub struct Journal {
    elements: Vec<Element>,
    derniere_date: Option<NaiveDate>,
}

fn separateur(date: NaiveDate) -> String {
    format!("--- {} ---", date.format("%d.%m.%Y"))
}

impl Journal {
    /// Ajoute un calcul daté du jour (horloge locale).
    pub fn ajouter(&mut self, calcul: impl Into<String>, resultat: impl Into<String>) {
        self.ajouter_le(Local::now().date_naive(), calcul, resultat);
    }

    pub fn ajouter_le(
        &mut self,
        date: NaiveDate,
        calcul: impl Into<String>,
        resultat: impl Into<String>,
    ) {
        if self.derniere_date != Some(date) {
            self.derniere_date = Some(date);
            self.elements.push(Element::Date(date));
        }
        let e = EntreeJournal {
            calcul: calcul.into(),
            resultat: resultat.into(),
        };
        info!("{}", ligne_journal(&e.calcul, &e.resultat));
        self.elements.push(Element::Calcul(e));
    }

    /// Calculs seuls (sans séparateurs), dans l’ordre d’insertion.
    pub fn entrees(&self) -> impl Iterator<Item = &EntreeJournal> {
        self.elements.iter().filter_map(|el| match el {
            Element::Calcul(e) => Some(e),
            Element::Date(_) => None,
        })
    }

    /// Lignes affichées : séparateurs de date + "<calcul>: <résultat>".
    pub fn lignes(&self) -> Vec<String> {
        self.elements
            .iter()
            .map(|el| match el {
                Element::Date(d) => separateur(*d),
                Element::Calcul(e) => ligne_journal(&e.calcul, &e.resultat),
            })
            .collect()
    }

    pub fn vider(&mut self) {
        self.elements.clear();
        self.derniere_date = None;
    }

    /// Nombre de calculs (les séparateurs ne comptent pas).
    pub fn len(&self) -> usize {
        self.entrees().count()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
