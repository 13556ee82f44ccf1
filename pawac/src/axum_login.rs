/// Credentials accepted by the login form.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub origin: String,
}

mod impls;
