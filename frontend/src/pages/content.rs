//! Static copy for the landing page.

pub struct Category {
    pub icon: &'static str,
    pub label: &'static str,
    pub count: &'static str,
    pub tint: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category { icon: "🚲", label: "Электровелосипеды", count: "120+ моделей", tint: "tint-accent" },
    Category { icon: "⚡", label: "Электромопеды", count: "80+ моделей", tint: "tint-blue" },
    Category { icon: "🛴", label: "Электросамокаты", count: "200+ моделей", tint: "tint-accent" },
    Category { icon: "🛺", label: "Электротрициклы", count: "60+ моделей", tint: "tint-blue" },
];

pub struct GalleryImage {
    pub src: &'static str,
    pub label: &'static str,
}

pub const GALLERY: [GalleryImage; 4] = [
    GalleryImage { src: "https://images.unsplash.com/photo-1571068316344-75bc76f77890?w=600&q=80", label: "Электросамокаты" },
    GalleryImage { src: "https://images.unsplash.com/photo-1532298229144-0ec0c57515c7?w=600&q=80", label: "Электровелосипеды" },
    GalleryImage { src: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&q=80", label: "Городской транспорт" },
    GalleryImage { src: "https://images.unsplash.com/photo-1616442831776-4b26f1eaddb8?w=600&q=80", label: "Электромопеды" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature { icon: "🚲", title: "Электровелосипеды", desc: "Дальность до 120 км на одном заряде. Идеально для городских поездок и загородных прогулок." },
    Feature { icon: "⚡", title: "Электромопеды", desc: "Скорость до 60 км/ч, мощный мотор. Замена автомобилю в городском трафике." },
    Feature { icon: "🛴", title: "Электросамокаты", desc: "Лёгкие и складные модели для последней мили. От 15 до 50 км/ч на любой вкус." },
    Feature { icon: "🛺", title: "Электротрициклы", desc: "Устойчивая платформа для груза и комфорта. Грузоподъёмность до 300 кг." },
    Feature { icon: "🔋", title: "Мощные аккумуляторы", desc: "Литий-ионные батареи с гарантией 2 года. Зарядка от обычной розетки." },
    Feature { icon: "🛡", title: "Официальная гарантия", desc: "До 3 лет гарантии на всю технику. Собственный сервисный центр." },
];

pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step { num: "01", title: "Выбираете", desc: "Подбираете модель из каталога или консультируетесь с нашим специалистом" },
    Step { num: "02", title: "Тест-драйв", desc: "Приезжаете к нам или вызываете тест-драйв на дом, чтобы убедиться лично" },
    Step { num: "03", title: "Оформляете", desc: "Оплата картой, наличными или в рассрочку без переплат" },
    Step { num: "04", title: "Получаете", desc: "Доставка до двери за 1–3 дня или самовывоз со склада" },
];

pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
    pub cta: &'static str,
}

pub const TIERS: [Tier; 2] = [
    Tier {
        name: "Начальный уровень",
        price: "от 25 000 ₽",
        features: &[
            "Электросамокаты до 35 км/ч",
            "Электровелосипеды с мотором 250W",
            "Дальность 40–70 км",
            "Гарантия 1 год",
            "Базовый сервис",
        ],
        highlight: false,
        cta: "Смотреть модели",
    },
    Tier {
        name: "Премиум уровень",
        price: "от 85 000 ₽",
        features: &[
            "Электромопеды и трициклы",
            "Мощность мотора от 1000W",
            "Дальность 100–150 км",
            "Гарантия 3 года",
            "Сервис + выезд мастера",
        ],
        highlight: true,
        cta: "Получить консультацию",
    },
];

pub const PERKS: [(&str, &str); 3] = [
    ("🚚", "Доставка по всей России"),
    ("🛡", "Гарантия до 3 лет"),
    ("🎧", "Поддержка 7 дней в неделю"),
];
