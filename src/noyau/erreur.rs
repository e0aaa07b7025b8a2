// src/noyau/erreur.rs
//
// Erreurs du noyau radical.
// - EntreeInvalide      : entrée non convertible en rationnel exact, ou radicande négatif
// - RadicalIncompatible : opération exacte entre deux familles de radicaux distinctes
// - DivisionParZero     : diviseur de norme exactement nulle
//
// Toutes les erreurs remontent de façon synchrone à l'appelant.
// Aucune récupération interne, aucun résultat partiel.

use num_bigint::BigInt;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErreurRadical {
    /// Entrée non analysable, ou radicande strictement négatif.
    EntreeInvalide(String),

    /// Deux radicandes non nuls et différents : l'addition/multiplication
    /// exacte sort de la forme `a + b·√c`.
    RadicalIncompatible(BigInt, BigInt),

    /// Norme du diviseur exactement nulle (le diviseur vaut zéro).
    DivisionParZero,
}

impl fmt::Display for ErreurRadical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntreeInvalide(msg) => write!(f, "entrée invalide : {msg}"),
            Self::RadicalIncompatible(c1, c2) => {
                write!(f, "radicaux différents ({c1} et {c2}) non supportés")
            }
            Self::DivisionParZero => write!(f, "division par zéro"),
        }
    }
}

impl std::error::Error for ErreurRadical {}
