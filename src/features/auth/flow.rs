//! Multi-step credential workflows for the storefront: account recovery
//! (email, one-time code, new password) and account creation (details, code).
//! Each flow is a single tagged phase value with transitions defined for
//! every phase, so impossible combinations cannot be represented. Remote
//! calls are described as plain values; the view layer dispatches them and
//! reports completions back, which keeps the flows free of any networking
//! and directly testable.

use crate::features::auth::otp::OtpCode;

/// Seconds a user must wait before a code can be re-requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;
/// Minimum length for a new account or replacement password.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Minimum length accepted on the sign-in form.
pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;

/// Basic email shape: something before and after an `@`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Which form input a validation failure belongs to, for inline display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    Confirm,
}

/// Field-level validation failures. They block submission and never produce
/// a network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort { min: usize },
    PasswordMismatch,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::PasswordRequired | FieldError::PasswordTooShort { .. } => Field::Password,
            FieldError::PasswordMismatch => Field::Confirm,
        }
    }

    pub fn message(self) -> String {
        match self {
            FieldError::NameRequired => "Please enter your name".to_string(),
            FieldError::EmailRequired => "Email is required".to_string(),
            FieldError::EmailInvalid => "Invalid email format".to_string(),
            FieldError::PasswordRequired => "Password is required".to_string(),
            FieldError::PasswordTooShort { min } => {
                format!("Must be at least {min} characters")
            }
            FieldError::PasswordMismatch => "Passwords don't match".to_string(),
        }
    }
}

/// Cooldown bookkeeping shared by both flows so one ticker can drive either.
pub trait Countdown {
    fn seconds(&self) -> u32;
    fn tick(&mut self);
}

/// Local checks for the single-step sign-in form.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FieldError::EmailInvalid);
    }
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort {
            min: MIN_LOGIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if confirm != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Account recovery
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryPhase {
    /// Collecting the account email.
    Email,
    /// Waiting for the emailed one-time code.
    Otp,
    /// Collecting the replacement password.
    Reset,
}

/// Remote calls the recovery flow asks the view layer to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryCall {
    IssueCode {
        email: String,
    },
    VerifyCode {
        email: String,
        otp: String,
    },
    CommitPassword {
        email: String,
        otp: String,
        new_password: String,
    },
}

#[derive(Clone, Debug)]
pub struct RecoveryFlow {
    phase: RecoveryPhase,
    email: String,
    otp: OtpCode,
    cooldown: u32,
}

impl Default for RecoveryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryFlow {
    pub fn new() -> Self {
        Self {
            phase: RecoveryPhase::Email,
            email: String::new(),
            otp: OtpCode::new(),
            cooldown: 0,
        }
    }

    pub fn phase(&self) -> RecoveryPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &OtpCode {
        &self.otp
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn can_resend(&self) -> bool {
        self.phase == RecoveryPhase::Otp && self.cooldown == 0
    }

    pub fn code_complete(&self) -> bool {
        self.otp.is_complete()
    }

    /// Step 1: validate the address and describe the issue-code call.
    /// Invalid input yields a field error and no call.
    pub fn submit_email(&mut self, input: &str) -> Result<RecoveryCall, FieldError> {
        let email = input.trim();
        if email.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(FieldError::EmailInvalid);
        }
        self.email = email.to_string();
        Ok(RecoveryCall::IssueCode {
            email: self.email.clone(),
        })
    }

    /// The issue-code call succeeded: advance to the code step and start the
    /// resend cooldown. A failed call leaves the flow untouched.
    pub fn code_issued(&mut self) {
        self.phase = RecoveryPhase::Otp;
        self.cooldown = RESEND_COOLDOWN_SECS;
    }

    /// Digit entry on the code step, forwarded to the code model.
    pub fn enter_digit(&mut self, index: usize, input: &str) -> Option<usize> {
        if self.phase != RecoveryPhase::Otp {
            return None;
        }
        self.otp.enter(index, input)
    }

    pub fn backspace_focus(&self, index: usize) -> Option<usize> {
        if self.phase != RecoveryPhase::Otp {
            return None;
        }
        self.otp.backspace_focus(index)
    }

    /// Step 2: describe the verify call once all four digits are present.
    pub fn submit_code(&self) -> Option<RecoveryCall> {
        if self.phase != RecoveryPhase::Otp || !self.otp.is_complete() {
            return None;
        }
        Some(RecoveryCall::VerifyCode {
            email: self.email.clone(),
            otp: self.otp.value(),
        })
    }

    /// The verify call succeeded. A rejected code keeps the digits in place
    /// for correction and the phase unchanged.
    pub fn code_verified(&mut self) {
        if self.phase == RecoveryPhase::Otp {
            self.phase = RecoveryPhase::Reset;
        }
    }

    /// Clears the digits, restarts the cooldown, and describes a fresh
    /// issue-code call; a no-op while the cooldown is still running.
    pub fn resend(&mut self) -> Option<RecoveryCall> {
        if !self.can_resend() {
            return None;
        }
        self.otp.clear();
        self.cooldown = RESEND_COOLDOWN_SECS;
        Some(RecoveryCall::IssueCode {
            email: self.email.clone(),
        })
    }

    /// Back to the address step, keeping the entered address and dropping
    /// any digits.
    pub fn change_email(&mut self) {
        if self.phase == RecoveryPhase::Otp {
            self.phase = RecoveryPhase::Email;
            self.otp.clear();
        }
    }

    /// Step 3: validate the new password pair and describe the commit call.
    /// Only offered on the reset step.
    pub fn submit_password(
        &self,
        password: &str,
        confirm: &str,
    ) -> Result<RecoveryCall, FieldError> {
        validate_new_password(password, confirm)?;
        Ok(RecoveryCall::CommitPassword {
            email: self.email.clone(),
            otp: self.otp.value(),
            new_password: password.to_string(),
        })
    }
}

impl Countdown for RecoveryFlow {
    fn seconds(&self) -> u32 {
        self.cooldown
    }

    fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Account creation
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupPhase {
    /// Collecting name, email, and password.
    Form,
    /// Waiting for the emailed one-time code.
    Otp,
}

/// Remote calls the signup flow asks the view layer to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupCall {
    Register {
        name: String,
        email: String,
        password: String,
    },
    VerifyAccount {
        name: String,
        email: String,
        password: String,
        otp: String,
    },
}

#[derive(Clone, Debug)]
pub struct SignupFlow {
    phase: SignupPhase,
    name: String,
    email: String,
    password: String,
    otp: OtpCode,
    cooldown: u32,
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFlow {
    pub fn new() -> Self {
        Self {
            phase: SignupPhase::Form,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            otp: OtpCode::new(),
            cooldown: 0,
        }
    }

    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &OtpCode {
        &self.otp
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn can_resend(&self) -> bool {
        self.phase == SignupPhase::Otp && self.cooldown == 0
    }

    pub fn code_complete(&self) -> bool {
        self.otp.is_complete()
    }

    /// Validates the registration form and describes the register call,
    /// capturing the details for the later verify call.
    pub fn submit_details(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupCall, FieldError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FieldError::NameRequired);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(FieldError::EmailInvalid);
        }
        if password.is_empty() {
            return Err(FieldError::PasswordRequired);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        self.name = name.to_string();
        self.email = email.to_string();
        self.password = password.to_string();
        Ok(SignupCall::Register {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// The register call succeeded: advance to the code step and start the
    /// resend cooldown.
    pub fn registered(&mut self) {
        self.phase = SignupPhase::Otp;
        self.cooldown = RESEND_COOLDOWN_SECS;
    }

    pub fn enter_digit(&mut self, index: usize, input: &str) -> Option<usize> {
        if self.phase != SignupPhase::Otp {
            return None;
        }
        self.otp.enter(index, input)
    }

    pub fn backspace_focus(&self, index: usize) -> Option<usize> {
        if self.phase != SignupPhase::Otp {
            return None;
        }
        self.otp.backspace_focus(index)
    }

    /// Describes the verify call once all four digits are present. The
    /// captured registration details ride along, as the backend finalizes
    /// the account from them.
    pub fn submit_code(&self) -> Option<SignupCall> {
        if self.phase != SignupPhase::Otp || !self.otp.is_complete() {
            return None;
        }
        Some(SignupCall::VerifyAccount {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            otp: self.otp.value(),
        })
    }

    /// Clears the digits, restarts the cooldown, and re-registers with the
    /// captured details; a no-op while the cooldown is still running.
    pub fn resend(&mut self) -> Option<SignupCall> {
        if !self.can_resend() {
            return None;
        }
        self.otp.clear();
        self.cooldown = RESEND_COOLDOWN_SECS;
        Some(SignupCall::Register {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Back to the details step, keeping every entered field and dropping
    /// any digits.
    pub fn change_details(&mut self) {
        if self.phase == SignupPhase::Otp {
            self.phase = SignupPhase::Form;
            self.otp.clear();
        }
    }
}

impl Countdown for SignupFlow {
    fn seconds(&self) -> u32 {
        self.cooldown
    }

    fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Countdown, Field, FieldError, MIN_LOGIN_PASSWORD_LEN, MIN_PASSWORD_LEN, RecoveryCall,
        RecoveryFlow, RecoveryPhase, RESEND_COOLDOWN_SECS, SignupCall, SignupFlow, SignupPhase,
        is_valid_email, validate_login,
    };

    fn recovery_at_otp() -> RecoveryFlow {
        let mut flow = RecoveryFlow::new();
        flow.submit_email("a@b.com").expect("valid email");
        flow.code_issued();
        flow
    }

    fn enter_code(flow: &mut RecoveryFlow, code: &str) {
        for (index, ch) in code.chars().enumerate() {
            flow.enter_digit(index, &ch.to_string());
        }
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@shop.example"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@missing-local"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("spaced out@b.com"));
    }

    #[test]
    fn invalid_identifiers_never_yield_a_call() {
        let mut flow = RecoveryFlow::new();
        assert_eq!(flow.submit_email(""), Err(FieldError::EmailRequired));
        assert_eq!(flow.submit_email("   "), Err(FieldError::EmailRequired));
        assert_eq!(
            flow.submit_email("not-an-email"),
            Err(FieldError::EmailInvalid)
        );
        assert_eq!(flow.phase(), RecoveryPhase::Email);
    }

    #[test]
    fn issuing_a_code_advances_and_starts_the_cooldown() {
        let mut flow = RecoveryFlow::new();
        let call = flow.submit_email("  a@b.com  ").expect("valid email");
        assert_eq!(
            call,
            RecoveryCall::IssueCode {
                email: "a@b.com".to_string()
            }
        );
        // Still on the first step until the backend confirms.
        assert_eq!(flow.phase(), RecoveryPhase::Email);

        flow.code_issued();
        assert_eq!(flow.phase(), RecoveryPhase::Otp);
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);
        assert!(!flow.can_resend());
    }

    #[test]
    fn verify_is_gated_on_a_complete_code() {
        let mut flow = recovery_at_otp();
        assert_eq!(flow.submit_code(), None);
        enter_code(&mut flow, "123");
        assert_eq!(flow.submit_code(), None);
        flow.enter_digit(3, "4");
        assert_eq!(
            flow.submit_code(),
            Some(RecoveryCall::VerifyCode {
                email: "a@b.com".to_string(),
                otp: "1234".to_string()
            })
        );
    }

    #[test]
    fn a_rejected_code_keeps_the_flow_on_the_code_step() {
        let mut flow = recovery_at_otp();
        enter_code(&mut flow, "1234");
        // The backend said no: nothing is applied, nothing reverts.
        assert_eq!(flow.phase(), RecoveryPhase::Otp);
        assert_eq!(flow.otp().value(), "1234");
    }

    #[test]
    fn resend_is_gated_on_the_cooldown() {
        let mut flow = recovery_at_otp();
        enter_code(&mut flow, "1234");
        assert_eq!(flow.resend(), None);

        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.tick();
        }
        assert_eq!(flow.cooldown(), 0);
        flow.tick();
        assert_eq!(flow.cooldown(), 0);

        let call = flow.resend().expect("cooldown has run out");
        assert_eq!(
            call,
            RecoveryCall::IssueCode {
                email: "a@b.com".to_string()
            }
        );
        assert_eq!(flow.otp().value(), "");
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn change_email_keeps_the_address_and_drops_the_digits() {
        let mut flow = recovery_at_otp();
        enter_code(&mut flow, "12");
        flow.change_email();
        assert_eq!(flow.phase(), RecoveryPhase::Email);
        assert_eq!(flow.email(), "a@b.com");
        assert_eq!(flow.otp().value(), "");
    }

    #[test]
    fn stale_completions_after_change_email_are_ignored() {
        let mut flow = recovery_at_otp();
        flow.change_email();
        flow.code_verified();
        assert_eq!(flow.phase(), RecoveryPhase::Email);
    }

    #[test]
    fn new_password_validation_blocks_the_commit_call() {
        let mut flow = recovery_at_otp();
        enter_code(&mut flow, "1234");
        flow.code_verified();
        assert_eq!(flow.phase(), RecoveryPhase::Reset);

        assert_eq!(
            flow.submit_password("", ""),
            Err(FieldError::PasswordRequired)
        );
        assert_eq!(
            flow.submit_password("short", "short"),
            Err(FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert_eq!(
            flow.submit_password("longenough", "different"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn recovery_end_to_end() {
        let mut flow = RecoveryFlow::new();
        flow.submit_email("a@b.com").expect("valid email");
        flow.code_issued();
        assert_eq!(flow.phase(), RecoveryPhase::Otp);
        assert_eq!(flow.cooldown(), 60);

        enter_code(&mut flow, "1234");
        flow.submit_code().expect("complete code");
        flow.code_verified();
        assert_eq!(flow.phase(), RecoveryPhase::Reset);

        let call = flow
            .submit_password("hunter2hunter2", "hunter2hunter2")
            .expect("valid password pair");
        assert_eq!(
            call,
            RecoveryCall::CommitPassword {
                email: "a@b.com".to_string(),
                otp: "1234".to_string(),
                new_password: "hunter2hunter2".to_string(),
            }
        );
    }

    #[test]
    fn signup_form_validation() {
        let mut flow = SignupFlow::new();
        assert_eq!(
            flow.submit_details("", "a@b.com", "password1"),
            Err(FieldError::NameRequired)
        );
        assert_eq!(
            flow.submit_details("Jo", "nope", "password1"),
            Err(FieldError::EmailInvalid)
        );
        assert_eq!(
            flow.submit_details("Jo", "a@b.com", "short"),
            Err(FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert_eq!(flow.phase(), SignupPhase::Form);
    }

    #[test]
    fn signup_end_to_end_carries_the_captured_details() {
        let mut flow = SignupFlow::new();
        let call = flow
            .submit_details(" Jo Doe ", " jo@shop.example ", "password1")
            .expect("valid details");
        assert_eq!(
            call,
            SignupCall::Register {
                name: "Jo Doe".to_string(),
                email: "jo@shop.example".to_string(),
                password: "password1".to_string(),
            }
        );

        flow.registered();
        assert_eq!(flow.phase(), SignupPhase::Otp);
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);

        for (index, ch) in "9876".chars().enumerate() {
            flow.enter_digit(index, &ch.to_string());
        }
        assert_eq!(
            flow.submit_code(),
            Some(SignupCall::VerifyAccount {
                name: "Jo Doe".to_string(),
                email: "jo@shop.example".to_string(),
                password: "password1".to_string(),
                otp: "9876".to_string(),
            })
        );
    }

    #[test]
    fn signup_resend_reissues_the_registration() {
        let mut flow = SignupFlow::new();
        flow.submit_details("Jo", "jo@shop.example", "password1")
            .expect("valid details");
        flow.registered();
        flow.enter_digit(0, "1");

        assert_eq!(flow.resend(), None);
        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.tick();
        }
        let call = flow.resend().expect("cooldown has run out");
        assert!(matches!(call, SignupCall::Register { .. }));
        assert_eq!(flow.otp().value(), "");
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn signup_change_details_returns_to_the_form() {
        let mut flow = SignupFlow::new();
        flow.submit_details("Jo", "jo@shop.example", "password1")
            .expect("valid details");
        flow.registered();
        flow.enter_digit(0, "5");
        flow.change_details();
        assert_eq!(flow.phase(), SignupPhase::Form);
        assert_eq!(flow.email(), "jo@shop.example");
        assert_eq!(flow.otp().value(), "");
    }

    #[test]
    fn digit_entry_is_ignored_off_the_code_step() {
        let mut flow = RecoveryFlow::new();
        assert_eq!(flow.enter_digit(0, "1"), None);
        assert_eq!(flow.otp().value(), "");
    }

    #[test]
    fn login_validation() {
        assert_eq!(validate_login("", "secret1"), Err(FieldError::EmailRequired));
        assert_eq!(
            validate_login("nope", "secret1"),
            Err(FieldError::EmailInvalid)
        );
        assert_eq!(
            validate_login("a@b.com", ""),
            Err(FieldError::PasswordRequired)
        );
        assert_eq!(
            validate_login("a@b.com", "short"),
            Err(FieldError::PasswordTooShort {
                min: MIN_LOGIN_PASSWORD_LEN
            })
        );
        assert_eq!(validate_login(" a@b.com ", "secret1"), Ok(()));
    }

    #[test]
    fn field_errors_map_to_their_inputs() {
        assert_eq!(FieldError::NameRequired.field(), Field::Name);
        assert_eq!(FieldError::EmailInvalid.field(), Field::Email);
        assert_eq!(
            FieldError::PasswordTooShort { min: 8 }.field(),
            Field::Password
        );
        assert_eq!(FieldError::PasswordMismatch.field(), Field::Confirm);
    }
}
