/// Constants used throughout the relay
// Environment variables
pub const ENV_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_RECIPIENT: &str = "CONTACT_EMAIL";
pub const ENV_SENDER: &str = "CONTACT_FROM";
pub const ENV_PROVIDER_URL: &str = "RESEND_API_URL";
pub const ENV_SITE_NAME: &str = "CONTACT_SITE_NAME";
pub const ENV_ANSWER_PREFLIGHT: &str = "CONTACT_ANSWER_PREFLIGHT";

// Defaults
pub const DEFAULT_RECIPIENT: &str = "bjmdesignsok@gmail.com";
pub const DEFAULT_SENDER: &str = "BJM Portfolio <noreply@bjmdesigns.com>";
pub const DEFAULT_PROVIDER_URL: &str = "https://api.resend.com";
pub const DEFAULT_SITE_NAME: &str = "BJM Portfolio";

/// Resend send endpoint, relative to the provider base URL
pub const PROVIDER_SEND_PATH: &str = "emails";

/// Largest request body accepted from the contact form
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// User-facing response messages
pub const MSG_MISCONFIGURED: &str = "Configuración del servidor incompleta";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_FIELDS_REQUIRED: &str = "Todos los campos son requeridos";
pub const MSG_INVALID_EMAIL: &str = "Email inválido";
pub const MSG_INTERNAL_ERROR: &str = "Error interno del servidor";
pub const MSG_SENT: &str = "Mensaje enviado correctamente";

// CORS header values attached to every response
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
