//! Fixed HTML template for the verification email.
//!
//! Plain string substitution, one fixed layout. The user name and the
//! verification code are inserted verbatim, unescaped and untruncated.

pub const VERIFICATION_SUBJECT: &str = "Código de Verificación - GateGuard";

pub fn render_verification_email(user_name: &str, verification_code: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Verificación de Email - GateGuard</title>
</head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="text-align: center; background-color: #1976D2; color: white; padding: 20px; border-radius: 10px 10px 0 0;">
        <h1>GateGuard Residencial</h1>
        <p>Sistema de Control de Acceso</p>
    </div>

    <div style="background-color: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px;">
        <h2>¡Hola {user_name}!</h2>
        <p>Gracias por registrarte en GateGuard Residencial. Para completar tu registro, necesitamos verificar tu dirección de email.</p>

        <div style="background-color: white; border: 2px solid #1976D2; border-radius: 10px; padding: 20px; text-align: center; margin: 20px 0;">
            <p style="margin: 0 0 10px 0; font-weight: bold;">Tu código de verificación es:</p>
            <div style="font-size: 32px; font-weight: bold; color: #1976D2; letter-spacing: 5px; font-family: monospace;">
                {verification_code}
            </div>
        </div>

        <p><strong>Importante:</strong></p>
        <ul>
            <li>Este código expira en <strong>10 minutos</strong></li>
            <li>Ingresa el código en la aplicación para completar tu registro</li>
            <li>Si no solicitaste este código, ignora este email</li>
        </ul>

        <p style="text-align: center; color: #666; font-size: 12px; margin-top: 30px;">
            Este es un email automático, por favor no respondas.
        </p>
    </div>
</body>
</html>
"#
  )
}
