// Abstract Factory - authentication screens.
// Student and teacher flows each get their own views and controllers.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Student,
    Teacher,
}

impl Audience {
    fn label(self) -> &'static str {
        match self {
            Audience::Student => "Student",
            Audience::Teacher => "Teacher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthView {
    pub audience: Audience,
    pub kind: AuthType,
}

#[derive(Debug)]
pub struct AuthViewController {
    pub audience: Audience,
    pub content_view: AuthView,
}

pub trait AuthViewFactory {
    fn audience(&self) -> Audience;

    fn auth_view(&self, kind: AuthType, out: &mut dyn Write) -> Result<AuthView> {
        writeln!(out, "{} View has been created.", self.audience().label())?;
        Ok(AuthView {
            audience: self.audience(),
            kind,
        })
    }

    fn auth_controller(&self, kind: AuthType, out: &mut dyn Write) -> Result<AuthViewController> {
        let controller = AuthViewController {
            audience: self.audience(),
            content_view: self.auth_view(kind, out)?,
        };
        writeln!(out, "{} View Controller has been created.", self.audience().label())?;
        Ok(controller)
    }
}

pub struct StudentAuthViewFactory;

impl AuthViewFactory for StudentAuthViewFactory {
    fn audience(&self) -> Audience {
        Audience::Student
    }
}

pub struct TeacherAuthViewFactory;

impl AuthViewFactory for TeacherAuthViewFactory {
    fn audience(&self) -> Audience {
        Audience::Teacher
    }
}

pub struct Presenter<'a> {
    factory: &'a dyn AuthViewFactory,
}

impl<'a> Presenter<'a> {
    pub fn new(factory: &'a dyn AuthViewFactory) -> Self {
        Self { factory }
    }

    pub fn login(&self, out: &mut dyn Write) -> Result<AuthViewController> {
        writeln!(out, "Login screen has been presented.")?;
        self.factory.auth_controller(AuthType::Login, out)
    }

    pub fn sign_up(&self, out: &mut dyn Write) -> Result<AuthViewController> {
        writeln!(out, "Sign up screen has been presented.")?;
        self.factory.auth_controller(AuthType::SignUp, out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Testing Student Factory:")?;
    let student = Presenter::new(&StudentAuthViewFactory);
    student.login(out)?;
    student.sign_up(out)?;

    writeln!(out)?;

    writeln!(out, "Testing Teacher Factory:")?;
    let teacher = Presenter::new(&TeacherAuthViewFactory);
    teacher.login(out)?;
    teacher.sign_up(out)?;
    Ok(())
}
