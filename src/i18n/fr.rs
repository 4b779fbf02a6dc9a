//! French message catalog.
//!
//! Keys are the canonical English templates; placeholders are kept
//! verbatim and substituted at presentation time.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(super) static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "The password must be at least 8 characters long and \
             contain an uppercase letter, a lowercase letter, a digit and a special character.",
            "Le mot de passe doit contenir au moins 8 caractères, dont une majuscule, \
             une minuscule, un chiffre et un caractère spécial.",
        ),
        (
            "The medication \"{{ medicament }}\" does not exist in the medication database.",
            "Le médicament \"{{ medicament }}\" n'existe pas dans la base de données \
             des médicaments.",
        ),
        (
            "This is not a valid account type.",
            "Ce type de compte n'est pas valide.",
        ),
        (
            "This value should not be blank.",
            "Cette valeur ne doit pas être vide.",
        ),
        (
            "This value is too short. It should have {{ limit }} characters or more.",
            "Cette valeur est trop courte. Elle doit contenir au moins {{ limit }} caractères.",
        ),
        (
            "This value is too long. It should have {{ limit }} characters or less.",
            "Cette valeur est trop longue. Elle doit contenir au plus {{ limit }} caractères.",
        ),
        (
            "This value should be greater than {{ compared_value }}.",
            "Cette valeur doit être supérieure à {{ compared_value }}.",
        ),
        (
            "This value is not a valid email address.",
            "Cette valeur n'est pas une adresse email valide.",
        ),
        ("Invalid credentials.", "Identifiants invalides."),
    ])
});
