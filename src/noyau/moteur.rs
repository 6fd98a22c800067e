// src/noyau/moteur.rs
//
// Machine à touches de la calculatrice.
// --------------------------------------
// Tout l'état mutable vit ici, dans UN SEUL enregistrement (affichage,
// formule, drapeau d'attente, mémoire, historique) : plusieurs règles de
// dispatch lisent deux champs à la fois, il faut qu'ils bougent ensemble.
//
// Contrats :
// - appuyer() ne panique jamais et ne retourne jamais d'erreur : tout échec
//   d'évaluation devient le marqueur "Error" sur l'affichage.
// - la formule est accumulée en morceaux typés (opérandes/opérateurs), pas en
//   texte concaténé ; son rendu texte reste celui attendu ("7+3", "sin(3)").
// - l'historique est borné (les plus récents d'abord) et ne s'efface que par
//   effacer_historique().

use std::collections::VecDeque;

use tracing::warn;

use super::eval::eval_expression;
use super::format::format_resultat;

/// Marqueur terminal affiché quand une évaluation échoue.
/// L'utilisateur doit repasser par `clear` (un chiffre écrase aussi le marqueur).
pub const MARQUEUR_ERREUR: &str = "Error";

/// Taille maximale de l'historique (les plus anciens sont perdus).
const HISTORIQUE_MAX: usize = 10;

/* ------------------------ Touches ------------------------ */

/// Fonctions unaires du pavé scientifique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Factorielle,
}

/// Une touche reconnue par le moteur.
///
/// La couche de présentation traduit ses évènements (boutons, clavier) en
/// `Touche` via [`Touche::analyser`] ; le moteur ne voit rien d'autre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char), // '0'..='9'
    Point,
    Operateur(char), // + - * / ^
    Pourcent,
    Egal,
    Fonction(Fonction),
    Memoire,
    Effacer,
    /// Touche externe (clavier physique uniquement, pas de bouton).
    Retour,
}

impl Touche {
    /// Traduit un symbole de touche (correspondance exacte, sensible à la
    /// casse). Retourne None pour tout symbole hors du jeu reconnu.
    pub fn analyser(symbole: &str) -> Option<Touche> {
        let mut chars = symbole.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match c {
                '0'..='9' => return Some(Touche::Chiffre(c)),
                '.' => return Some(Touche::Point),
                '+' | '-' | '*' | '/' | '^' => return Some(Touche::Operateur(c)),
                '%' => return Some(Touche::Pourcent),
                '=' => return Some(Touche::Egal),
                '!' => return Some(Touche::Fonction(Fonction::Factorielle)),
                _ => return None,
            }
        }

        match symbole {
            "sin" => Some(Touche::Fonction(Fonction::Sin)),
            "cos" => Some(Touche::Fonction(Fonction::Cos)),
            "tan" => Some(Touche::Fonction(Fonction::Tan)),
            "log" => Some(Touche::Fonction(Fonction::Log)),
            "ln" => Some(Touche::Fonction(Fonction::Ln)),
            "sqrt" => Some(Touche::Fonction(Fonction::Sqrt)),
            "clear" => Some(Touche::Effacer),
            "memory" => Some(Touche::Memoire),
            "backspace" => Some(Touche::Retour),
            _ => None,
        }
    }
}

/* ------------------------ Formule ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
enum Morceau {
    Operande(String),
    Operateur(char),
}

/// Accumulation typée de la formule en cours.
///
/// Invariant : `morceaux` alterne Operande/Operateur et, non vide, se termine
/// toujours par un Operateur (l'opérande final n'est ajouté qu'au moment de
/// l'évaluation). Jamais deux opérateurs consécutifs : on REMPLACE le dernier.
///
/// `annotation` porte les formules purement décoratives ("50% = ", "sin(3)")
/// qui ne participent pas à une évaluation ultérieure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Formule {
    morceaux: Vec<Morceau>,
    annotation: Option<String>,
}

impl Formule {
    fn est_vide(&self) -> bool {
        self.morceaux.is_empty() && self.annotation.is_none()
    }

    fn a_des_morceaux(&self) -> bool {
        !self.morceaux.is_empty()
    }

    fn termine_par_operateur(&self) -> bool {
        matches!(self.morceaux.last(), Some(Morceau::Operateur(_)))
    }

    fn remplacer_operateur(&mut self, op: char) {
        if let Some(Morceau::Operateur(c)) = self.morceaux.last_mut() {
            *c = op;
        }
    }

    fn pousser(&mut self, operande: &str, op: char) {
        // une annotation ne survit pas au premier vrai opérateur
        self.annotation = None;
        self.morceaux.push(Morceau::Operande(operande.to_string()));
        self.morceaux.push(Morceau::Operateur(op));
    }

    fn annoter(&mut self, texte: String) {
        self.morceaux.clear();
        self.annotation = Some(texte);
    }

    fn vider(&mut self) {
        self.morceaux.clear();
        self.annotation = None;
    }

    fn texte(&self) -> String {
        if let Some(a) = &self.annotation {
            return a.clone();
        }
        let mut s = String::new();
        for m in &self.morceaux {
            match m {
                Morceau::Operande(op) => s.push_str(op),
                Morceau::Operateur(c) => s.push(*c),
            }
        }
        s
    }
}

/* ------------------------ Historique ------------------------ */

/// Une évaluation réussie : formule affichée + résultat formaté.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub formule: String,
    pub resultat: String,
}

/* ------------------------ Moteur ------------------------ */

/// Le moteur de calcul : une touche entre, l'état bouge, la vue relit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moteur {
    affichage: String,
    formule: Formule,
    attente_operande: bool,
    memoire: Option<String>,
    historique: VecDeque<EntreeHistorique>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            formule: Formule::default(),
            attente_operande: false,
            memoire: None,
            historique: VecDeque::new(),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ---------------- lecture (pour la vue) ---------------- */

    /// Valeur affichée : numéral valide ou marqueur "Error".
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Rendu texte de la formule en cours ("" si aucune).
    pub fn formule(&self) -> String {
        self.formule.texte()
    }

    /// Contenu de la mémoire, s'il y en a un.
    pub fn memoire(&self) -> Option<&str> {
        self.memoire.as_deref()
    }

    /// Historique, les plus récents d'abord (borné à 10 entrées).
    pub fn historique(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.historique.iter()
    }

    pub fn historique_len(&self) -> usize {
        self.historique.len()
    }

    /* ---------------- commandes ---------------- */

    /// Point d'entrée unique : reçoit une touche et met l'état à jour.
    /// Ne retourne jamais d'erreur ; un échec d'évaluation affiche "Error".
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Pourcent => self.pourcent(),
            Touche::Egal => self.egal(),
            Touche::Fonction(f) => self.fonction(f),
            Touche::Memoire => self.basculer_memoire(),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour(),
        }
    }

    /// Variante texte : symboles exacts ("7", "+", "sqrt", "clear"…).
    /// Les symboles inconnus sont ignorés.
    pub fn appuyer_texte(&mut self, symbole: &str) {
        if let Some(t) = Touche::analyser(symbole) {
            self.appuyer(t);
        }
    }

    /// Vide l'historique (seul moyen de l'effacer ; `clear` n'y touche pas).
    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    /* ---------------- règles par touche ---------------- */

    fn chiffre(&mut self, c: char) {
        if self.attente_operande || self.affichage == "0" {
            self.affichage = c.to_string();
            self.attente_operande = false;
        } else {
            self.affichage.push(c);
        }
    }

    fn point(&mut self) {
        if !self.affichage.contains('.') {
            self.affichage.push('.');
            self.attente_operande = false;
        }
    }

    fn operateur(&mut self, op: char) {
        if self.attente_operande && self.formule.termine_par_operateur() {
            // l'utilisateur change d'avis : on remplace, on n'empile pas
            self.formule.remplacer_operateur(op);
        } else {
            self.formule.pousser(&self.affichage, op);
        }
        self.attente_operande = true;
    }

    fn pourcent(&mut self) {
        let Ok(v) = self.affichage.parse::<f64>() else {
            self.affichage = MARQUEUR_ERREUR.to_string();
            return;
        };
        let p = v / 100.0;
        if !p.is_finite() {
            self.affichage = MARQUEUR_ERREUR.to_string();
            return;
        }

        let ancien = std::mem::replace(&mut self.affichage, format_resultat(p));
        self.formule.annoter(format!("{ancien}% = "));
        self.attente_operande = true;
    }

    fn egal(&mut self) {
        // rien à évaluer sans au moins un opérande + un opérateur
        // (une annotation seule — "50% = " — n'est pas évaluable)
        if !self.formule.a_des_morceaux() {
            return;
        }

        let mut complete = self.formule.clone();
        if complete.termine_par_operateur() {
            complete
                .morceaux
                .push(Morceau::Operande(self.affichage.clone()));
        }
        let texte = complete.texte();

        match eval_expression(&texte) {
            Ok(v) => {
                let resultat = format_resultat(v);
                self.pousser_historique(texte, resultat.clone());
                self.affichage = resultat;
                self.formule.vider();
            }
            Err(e) => {
                warn!(expression = %texte, erreur = %e, "échec d'évaluation");
                self.affichage = MARQUEUR_ERREUR.to_string();
            }
        }
        self.attente_operande = true;
    }

    fn fonction(&mut self, f: Fonction) {
        let x = &self.affichage;
        // (texte d'affichage, expression réellement évaluée) : seuls ln et
        // la factorielle s'affichent autrement qu'ils ne s'évaluent
        let simple = |nom: &str| {
            let t = format!("{nom}({x})");
            (t.clone(), t)
        };
        let (appel, expression) = match f {
            Fonction::Sin => simple("sin"),
            Fonction::Cos => simple("cos"),
            Fonction::Tan => simple("tan"),
            Fonction::Log => simple("log"),
            Fonction::Sqrt => simple("sqrt"),
            Fonction::Ln => (format!("ln({x})"), format!("log({x}, e)")),
            Fonction::Factorielle => (format!("{x}!"), format!("factorial({x})")),
        };

        match eval_expression(&expression) {
            Ok(v) => {
                let resultat = format_resultat(v);
                // l'entrée d'historique garde la formule en cours si elle
                // existe, sinon l'opérande sur lequel la fonction a porté
                let libelle = if self.formule.est_vide() {
                    self.affichage.clone()
                } else {
                    self.formule.texte()
                };
                self.pousser_historique(libelle, resultat.clone());
                self.formule.annoter(appel);
                self.affichage = resultat;
            }
            Err(e) => {
                warn!(expression = %expression, erreur = %e, "échec d'évaluation");
                self.affichage = MARQUEUR_ERREUR.to_string();
            }
        }
        self.attente_operande = true;
    }

    fn basculer_memoire(&mut self) {
        // bascule rangement/rappel : une seule case, pas deux opérations
        match self.memoire.take() {
            Some(v) => self.affichage = v,
            None => self.memoire = Some(self.affichage.clone()),
        }
    }

    fn effacer(&mut self) {
        // mémoire et historique survivent à clear
        self.affichage = "0".to_string();
        self.formule.vider();
        self.attente_operande = false;
    }

    fn retour(&mut self) {
        if self.affichage == "0" || self.attente_operande {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = "0".to_string();
        }
    }

    fn pousser_historique(&mut self, formule: String, resultat: String) {
        self.historique
            .push_front(EntreeHistorique { formule, resultat });
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
