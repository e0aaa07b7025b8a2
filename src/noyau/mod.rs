//! Noyau exact des radicaux quadratiques
//!
//! Organisation interne :
//! - erreur.rs   : erreurs synchrones du noyau
//! - entree.rs   : conversion des entrées rationnel-compatibles
//! - canon.rs    : forme canonique du triplet (ajout, facteur, radicande)
//! - nombre.rs   : le type valeur a + b·√c + moteur arithmétique
//! - compare.rs  : signe exact, ordre total, conversions numériques
//! - cache.rs    : table d'internement (Weak, purge opportuniste)
//! - format.rs   : affichage “joli” (√2, 1 + √2, 3√2/2…)
//! - lecture.rs  : ΣLocal (décimal tronqué, arithmétique scalée)

pub mod cache;
pub mod canon;
pub mod compare;
pub mod entree;
pub mod erreur;
pub mod format;
pub mod lecture;
pub mod nombre;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use cache::interner;
pub use entree::{EnEntier, EnRationnel};
pub use erreur::ErreurRadical;
pub use lecture::lecture_decimale;
pub use nombre::NombreRadical;
