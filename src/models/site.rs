use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqCategory {
    pub title: &'static str,
    pub questions: &'static [FaqEntry],
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub static FAQ: &[FaqCategory] = &[
    FaqCategory {
        title: "Informations Générales",
        questions: &[
            FaqEntry {
                question: "Quel est l'âge minimum pour conduire un kart ?",
                answer: "Vous devez avoir au moins 16 ans pour conduire un kart de manière autonome. Les jeunes de moins de 16 ans peuvent participer en tant que passagers avec un adulte responsable.",
            },
            FaqEntry {
                question: "Où commence le parcours ?",
                answer: "Le parcours commence à la Place aux Aires, en plein centre de Grasse, près des principales attractions touristiques. C'est un point de rendez-vous facilement accessible.",
            },
            FaqEntry {
                question: "Combien de temps dure une session ?",
                answer: "La durée varie selon l'expérience choisie : 45 minutes pour l'aventure solo, 60 minutes pour l'escapade romantique, 75 minutes pour l'aventure familiale, et 90 minutes pour l'expérience groupe.",
            },
        ],
    },
    FaqCategory {
        title: "Réservations",
        questions: &[
            FaqEntry {
                question: "Comment puis-je réserver ?",
                answer: "Vous pouvez réserver directement sur notre site web via le formulaire de réservation, par téléphone au +33 4 93 36 66 66, ou par email à reservation@karttouristiquegrasse.fr.",
            },
            FaqEntry {
                question: "Puis-je annuler ma réservation ?",
                answer: "Oui, vous pouvez annuler votre réservation jusqu'à 24h avant la date prévue sans frais. Pour les annulations de dernière minute, des frais peuvent s'appliquer.",
            },
            FaqEntry {
                question: "Y a-t-il des créneaux disponibles tous les jours ?",
                answer: "Nous sommes ouverts du lundi au dimanche de 9h à 18h. Les créneaux sont disponibles toute l'année, sauf les jours fériés. Il est recommandé de réserver à l'avance.",
            },
        ],
    },
    FaqCategory {
        title: "Sécurité",
        questions: &[
            FaqEntry {
                question: "Les karts sont-ils sécurisés ?",
                answer: "Absolument ! Nos karts électriques sont équipés de systèmes de sécurité avancés, de ceintures de sécurité, et nous fournissons tous les équipements de protection nécessaires (casques, gants).",
            },
            FaqEntry {
                question: "Y a-t-il une formation avant de partir ?",
                answer: "Oui, chaque session commence par une formation de sécurité de 10 minutes où nous expliquons le fonctionnement du kart, les règles de circulation et les consignes de sécurité.",
            },
            FaqEntry {
                question: "Que se passe-t-il en cas de mauvais temps ?",
                answer: "En cas de conditions météorologiques dangereuses, nous reportons la session à une date ultérieure sans frais supplémentaires. Pour une pluie légère, les karts sont équipés de protections.",
            },
        ],
    },
    FaqCategory {
        title: "Technique",
        questions: &[
            FaqEntry {
                question: "Quelle est l'autonomie des karts électriques ?",
                answer: "Nos karts électriques ont une autonomie de 4 à 6 heures en utilisation continue, largement suffisante pour toutes nos expériences. Ils sont rechargés entre chaque session.",
            },
            FaqEntry {
                question: "Les karts font-ils du bruit ?",
                answer: "Non, c'est l'un des grands avantages ! Les karts électriques sont silencieux, ce qui permet de profiter pleinement des explications du guide et de l'ambiance de Grasse.",
            },
            FaqEntry {
                question: "Quelle est la vitesse maximale ?",
                answer: "Pour des raisons de sécurité et pour profiter du paysage, la vitesse est limitée à 25 km/h. C'est parfait pour découvrir la ville en toute sécurité.",
            },
        ],
    },
    FaqCategory {
        title: "Tarifs",
        questions: &[
            FaqEntry {
                question: "Quels sont les moyens de paiement acceptés ?",
                answer: "Nous acceptons les cartes bancaires (Visa, Mastercard), les espèces, les chèques, et les paiements en ligne sécurisés. Des facilités de paiement sont possibles pour les groupes.",
            },
            FaqEntry {
                question: "Y a-t-il des réductions pour les groupes ?",
                answer: "Oui ! Nous proposons des tarifs dégressifs à partir de 5 personnes. Contactez-nous pour obtenir un devis personnalisé pour votre groupe ou événement d'entreprise.",
            },
            FaqEntry {
                question: "Le prix inclut-il tout ?",
                answer: "Oui, le prix inclut le kart, l'équipement de sécurité, le guide, et toutes les activités mentionnées dans l'expérience choisie. Aucun frais caché !",
            },
        ],
    },
];

pub static STATS: &[Stat] = &[
    Stat { value: 1250, suffix: "+", label: "Clients satisfaits", description: "Depuis notre lancement" },
    Stat { value: 18, suffix: "", label: "Sites touristiques", description: "Points d'intérêt visités" },
    Stat { value: 2500, suffix: "+", label: "Heures de parcours", description: "Temps total d'exploration" },
    Stat { value: 100, suffix: "%", label: "Électrique", description: "Zéro émission carbone" },
    Stat { value: 98, suffix: "%", label: "Satisfaction", description: "Taux de recommandation" },
    Stat { value: 45, suffix: "%", label: "Croissance", description: "Augmentation annuelle" },
];

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { title: "Adresse", details: &["Place aux Aires", "06130 Grasse", "France"] },
    ContactInfo { title: "Téléphone", details: &["+33 4 93 36 66 66", "Lun-Dim: 9h-18h"] },
    ContactInfo {
        title: "Email",
        details: &["info@karttouristiquegrasse.fr", "reservation@karttouristiquegrasse.fr"],
    },
    ContactInfo {
        title: "Horaires",
        details: &["Lundi - Dimanche", "9h00 - 18h00", "Fermé les jours fériés"],
    },
];

/// Case-insensitive search over questions and answers.
pub fn search_faq(query: &str) -> Vec<&'static FaqEntry> {
    let query = query.trim().to_lowercase();
    FAQ.iter()
        .flat_map(|category| category.questions.iter())
        .filter(|entry| {
            query.is_empty()
                || entry.question.to_lowercase().contains(&query)
                || entry.answer.to_lowercase().contains(&query)
        })
        .collect()
}
