use super::*;

fn form() -> RegistrationForm {
    RegistrationForm {
        username: " bob ".to_owned(),
        email: " bob@example.com ".to_owned(),
        password: "pw".to_owned(),
        role: "listener".to_owned(),
        ..RegistrationForm::default()
    }
}

#[test]
fn valid_form_trims_identity_fields() {
    let registration = validate_registration_input(&form()).unwrap();
    assert_eq!(registration.username, "bob");
    assert_eq!(registration.email, "bob@example.com");
    assert_eq!(registration.role, Some(Role::Listener));
}

#[test]
fn blank_extras_are_left_unset() {
    let mut input = form();
    input.first_name = "   ".to_owned();
    input.favorite_genres = "Rock, Jazz".to_owned();
    let registration = validate_registration_input(&input).unwrap();
    assert_eq!(registration.first_name, None);
    assert_eq!(registration.favorite_genres.as_deref(), Some("Rock, Jazz"));
}

#[test]
fn missing_required_field_is_rejected() {
    let mut input = form();
    input.password.clear();
    assert_eq!(
        validate_registration_input(&input),
        Err("Enter a username, an email and a password.")
    );
}

#[test]
fn email_without_at_sign_is_rejected() {
    let mut input = form();
    input.email = "bob.example.com".to_owned();
    assert_eq!(validate_registration_input(&input), Err("Enter a valid email address."));
}

#[test]
fn admin_role_cannot_be_self_selected() {
    let mut input = form();
    input.role = "admin".to_owned();
    assert_eq!(validate_registration_input(&input), Err("Choose listener or artist."));
}

#[test]
fn artist_role_is_accepted() {
    let mut input = form();
    input.role = "artist".to_owned();
    assert_eq!(validate_registration_input(&input).unwrap().role, Some(Role::Artist));
}
