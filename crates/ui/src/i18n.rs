use edu_core::model::Locale;

/// One card in the "about" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One card in the "contacts" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqCopy {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Every user-visible string on the page, per locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub brand: &'static str,

    pub nav_home: &'static str,
    pub nav_courses: &'static str,
    pub nav_about: &'static str,
    pub nav_faq: &'static str,
    pub nav_contacts: &'static str,
    pub greeting_prefix: &'static str,
    pub sign_in: &'static str,
    pub sign_out: &'static str,

    pub hero_title_top: &'static str,
    pub hero_title_bottom: &'static str,
    pub hero_subtitle: &'static str,
    pub start_learning: &'static str,
    pub learn_more: &'static str,

    pub courses_title: &'static str,
    pub courses_loading: &'static str,
    pub courses_empty: &'static str,
    pub instructor_unknown: &'static str,
    pub action_enroll: &'static str,
    pub action_continue: &'static str,
    pub action_sign_in_required: &'static str,
    pub action_enrolling: &'static str,

    pub about_title: &'static str,
    pub about_body: &'static str,
    pub features: &'static [FeatureCopy],

    pub faq_title: &'static str,
    pub faq: &'static [FaqCopy],

    pub contacts_title: &'static str,
    pub contacts_subtitle: &'static str,
    pub contacts: &'static [ContactCopy],

    pub footer: &'static str,

    pub auth_title: &'static str,
    pub auth_description: &'static str,
    pub tab_login: &'static str,
    pub tab_register: &'static str,
    pub label_email: &'static str,
    pub label_password: &'static str,
    pub label_full_name: &'static str,
    pub placeholder_email: &'static str,
    pub placeholder_full_name: &'static str,
    pub submit_login: &'static str,
    pub submit_register: &'static str,
    pub close: &'static str,

    pub toast_welcome_back: &'static str,
    pub toast_registered: &'static str,
    pub toast_signed_out: &'static str,
    pub toast_error: &'static str,
    pub toast_connection_error: &'static str,
    pub toast_connection_error_body: &'static str,
    pub toast_auth_required: &'static str,
    pub toast_auth_required_body: &'static str,
    pub toast_success: &'static str,
    pub toast_enroll_failed: &'static str,
    pub toast_generic_error: &'static str,
    pub dismiss: &'static str,
}

impl Strings {
    #[must_use]
    pub fn greeting(&self, name: &str) -> String {
        format!("{}{name}", self.greeting_prefix)
    }
}

#[must_use]
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
    }
}

static EN: Strings = Strings {
    brand: "EduPlatform",

    nav_home: "Home",
    nav_courses: "Courses",
    nav_about: "About",
    nav_faq: "FAQ",
    nav_contacts: "Contacts",
    greeting_prefix: "Hello, ",
    sign_in: "Sign in",
    sign_out: "Sign out",

    hero_title_top: "Education",
    hero_title_bottom: "at a new level",
    hero_subtitle: "A modern online learning platform with personal courses and qualified instructors",
    start_learning: "Start learning",
    learn_more: "Learn more",

    courses_title: "Available courses",
    courses_loading: "Loading courses...",
    courses_empty: "No courses available yet.",
    instructor_unknown: "Instructor to be announced",
    action_enroll: "Enroll",
    action_continue: "Continue",
    action_sign_in_required: "Sign in required",
    action_enrolling: "Enrolling…",

    about_title: "About the platform",
    about_body: "EduPlatform is a modern learning space where students find quality courses \
        and instructors share their knowledge. We believe education should be accessible and engaging.",
    features: &[
        FeatureCopy {
            icon: "📖",
            title: "500+ courses",
            description: "A wide choice of learning programs",
        },
        FeatureCopy {
            icon: "👥",
            title: "Experienced instructors",
            description: "Professionals in their field",
        },
        FeatureCopy {
            icon: "🏅",
            title: "Certificates",
            description: "Official confirmation of your knowledge",
        },
    ],

    faq_title: "Frequently asked questions",
    faq: &[
        FaqCopy {
            question: "How do I start learning on the platform?",
            answer: "Register, pick a course you like and start learning. \
                All materials are available right after you enroll.",
        },
        FaqCopy {
            question: "Can I get a certificate?",
            answer: "Yes, after successfully completing a course you receive an official certificate.",
        },
        FaqCopy {
            question: "Is there student support?",
            answer: "Our support team is always ready to help. \
                You can also ask instructors questions within the course.",
        },
    ],

    contacts_title: "Contact us",
    contacts_subtitle: "Have questions? We are always happy to help",
    contacts: &[
        ContactCopy {
            icon: "✉",
            title: "Email",
            value: "info@eduplatform.ru",
        },
        ContactCopy {
            icon: "☎",
            title: "Phone",
            value: "+7 (999) 123-45-67",
        },
        ContactCopy {
            icon: "📍",
            title: "Address",
            value: "1 Education St., Moscow",
        },
    ],

    footer: "© 2024 EduPlatform. All rights reserved.",

    auth_title: "Authorization",
    auth_description: "Sign in or create a new account",
    tab_login: "Sign in",
    tab_register: "Register",
    label_email: "Email",
    label_password: "Password",
    label_full_name: "Full name",
    placeholder_email: "your@email.com",
    placeholder_full_name: "John Smith",
    submit_login: "Sign in",
    submit_register: "Create account",
    close: "Close",

    toast_welcome_back: "Welcome back!",
    toast_registered: "Registration complete!",
    toast_signed_out: "You have signed out",
    toast_error: "Error",
    toast_connection_error: "Connection error",
    toast_connection_error_body: "Could not reach the server",
    toast_auth_required: "Authorization required",
    toast_auth_required_body: "Please sign in",
    toast_success: "Success!",
    toast_enroll_failed: "Could not enroll in the course",
    toast_generic_error: "Something went wrong. Please try again.",
    dismiss: "Dismiss",
};

static RU: Strings = Strings {
    brand: "EduPlatform",

    nav_home: "Главная",
    nav_courses: "Курсы",
    nav_about: "О нас",
    nav_faq: "FAQ",
    nav_contacts: "Контакты",
    greeting_prefix: "Привет, ",
    sign_in: "Войти",
    sign_out: "Выйти",

    hero_title_top: "Образование",
    hero_title_bottom: "нового уровня",
    hero_subtitle: "Современная платформа для онлайн-обучения с персональными курсами и квалифицированными преподавателями",
    start_learning: "Начать обучение",
    learn_more: "Узнать больше",

    courses_title: "Доступные курсы",
    courses_loading: "Загрузка курсов...",
    courses_empty: "Курсов пока нет.",
    instructor_unknown: "Преподаватель уточняется",
    action_enroll: "Записаться",
    action_continue: "Продолжить",
    action_sign_in_required: "Требуется вход",
    action_enrolling: "Запись…",

    about_title: "О платформе",
    about_body: "EduPlatform — это современное образовательное пространство, где студенты находят качественные курсы, \
        а преподаватели делятся своими знаниями. Мы верим, что образование должно быть доступным и увлекательным.",
    features: &[
        FeatureCopy {
            icon: "📖",
            title: "500+ курсов",
            description: "Широкий выбор образовательных программ",
        },
        FeatureCopy {
            icon: "👥",
            title: "Опытные преподаватели",
            description: "Профессионалы своего дела",
        },
        FeatureCopy {
            icon: "🏅",
            title: "Сертификаты",
            description: "Официальное подтверждение знаний",
        },
    ],

    faq_title: "Часто задаваемые вопросы",
    faq: &[
        FaqCopy {
            question: "Как начать обучение на платформе?",
            answer: "Зарегистрируйтесь на платформе, выберите интересующий курс и начните обучение. \
                Все материалы станут доступны сразу после записи.",
        },
        FaqCopy {
            question: "Можно ли получить сертификат?",
            answer: "Да, после успешного завершения курса вы получите официальный сертификат о прохождении обучения.",
        },
        FaqCopy {
            question: "Есть ли поддержка студентов?",
            answer: "Наша команда поддержки всегда готова помочь. \
                Вы также можете задавать вопросы преподавателям в рамках курса.",
        },
    ],

    contacts_title: "Свяжитесь с нами",
    contacts_subtitle: "Есть вопросы? Мы всегда рады помочь",
    contacts: &[
        ContactCopy {
            icon: "✉",
            title: "Email",
            value: "info@eduplatform.ru",
        },
        ContactCopy {
            icon: "☎",
            title: "Телефон",
            value: "+7 (999) 123-45-67",
        },
        ContactCopy {
            icon: "📍",
            title: "Адрес",
            value: "Москва, ул. Образования, 1",
        },
    ],

    footer: "© 2024 EduPlatform. Все права защищены.",

    auth_title: "Авторизация",
    auth_description: "Войдите или создайте новый аккаунт",
    tab_login: "Вход",
    tab_register: "Регистрация",
    label_email: "Email",
    label_password: "Пароль",
    label_full_name: "Полное имя",
    placeholder_email: "your@email.com",
    placeholder_full_name: "Иван Иванов",
    submit_login: "Войти",
    submit_register: "Зарегистрироваться",
    close: "Закрыть",

    toast_welcome_back: "Добро пожаловать!",
    toast_registered: "Регистрация успешна!",
    toast_signed_out: "Вы вышли из системы",
    toast_error: "Ошибка",
    toast_connection_error: "Ошибка подключения",
    toast_connection_error_body: "Не удалось связаться с сервером",
    toast_auth_required: "Требуется авторизация",
    toast_auth_required_body: "Пожалуйста, войдите в систему",
    toast_success: "Успешно!",
    toast_enroll_failed: "Не удалось записаться на курс",
    toast_generic_error: "Что-то пошло не так. Попробуйте ещё раз.",
    dismiss: "Закрыть",
};
