//! User-facing texts of the login view.

pub const EMAIL_REQUIRED: &str = "El email es requerido";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email válido";
pub const PASSWORD_REQUIRED: &str = "La contraseña es requerida";

pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const SERVER_UNREACHABLE: &str =
    "Error al intentar iniciar sesión. Por favor intente nuevamente.";
pub const SESSION_FAILED: &str = "No se pudo iniciar la sesión. Por favor intente nuevamente.";

pub const SUBMIT_LABEL: &str = "Iniciar Sesión";
pub const SUBMITTING_LABEL: &str = "Iniciando sesión...";

pub fn password_too_short(min_length: usize) -> String {
    format!("La contraseña debe tener al menos {min_length} caracteres")
}
