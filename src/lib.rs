// src/lib.rs
//
// radicaux_qpur — nombres radicaux quadratiques exacts a + b·√c,
// avec a et b rationnels exacts et c entier sans facteur carré.
//
// Le noyau vit dans src/noyau/ ; la racine ne fait que réexporter
// l'API publique.

pub mod noyau;

pub use noyau::{
    interner, lecture_decimale, EnEntier, EnRationnel, ErreurRadical, NombreRadical,
};
