//! Keyword-driven chat bot.
//!
//! Matching is plain substring search over the lowercased input, walking the
//! rules in declaration order. The first hit wins, even when a later keyword
//! also occurs in the message ("tarif" beats "contact" in "contact pour les
//! tarifs"). Callers that care about a particular answer must order the table
//! accordingly.

use serde::Serialize;

const PRICING: &str = "Nos tarifs varient selon l'expérience :\n• Aventure Solo : 25€\n• Escapade Romantique : 45€\n• Aventure Familiale : 35€\n• Expérience Groupe : 20€\n\nTous nos parcours incluent le kart électrique, le casque et un guide audio !";

pub const GREETING: &str = "Bonjour ! Je suis votre assistant virtuel pour Kart Touristique Grasse. Comment puis-je vous aider aujourd'hui ?";

pub const DEFAULT_RESPONSE: &str = "Je ne suis pas sûr de comprendre votre question. Pouvez-vous me demander des informations sur :\n• Les réservations\n• Les tarifs\n• La localisation\n• Nos horaires\n• La sécurité\n• Nos karts électriques\n\nOu utilisez les suggestions rapides ci-dessous !";

pub const QUICK_REPLIES: [&str; 4] = [
    "Réserver un parcours",
    "Voir les tarifs",
    "Localisation",
    "Nous contacter",
];

const DEFAULT_RULES: &[(&str, &str)] = &[
    (
        "réserver",
        "Parfait ! Vous pouvez réserver directement en cliquant sur le bouton \"Réserver maintenant\" ou en visitant notre page de réservation. Quel type d'expérience vous intéresse ?",
    ),
    ("tarif", PRICING),
    ("prix", PRICING),
    ("coût", PRICING),
    (
        "localisation",
        "Nous sommes situés au cœur de Grasse, capitale mondiale du parfum. Le point de départ est Place aux Aires. Nous vous enverrons l'adresse exacte lors de votre réservation !",
    ),
    (
        "contact",
        "Vous pouvez nous contacter :\n📧 Email : contact@kart-grasse.fr\n📞 Téléphone : +33 4 93 XX XX XX\n📍 Adresse : Place aux Aires, 06130 Grasse\n\nNous sommes ouverts tous les jours de 9h à 18h !",
    ),
    (
        "horaire",
        "Nos horaires d'ouverture :\n🕘 Lundi - Dimanche : 9h00 - 18h00\n\nDerniers départs à 17h00. Nous recommandons de réserver à l'avance !",
    ),
    (
        "durée",
        "La durée varie selon l'expérience choisie :\n• Solo : 45 minutes\n• Romantique : 60 minutes\n• Familiale : 75 minutes\n• Groupe : 90 minutes\n\nChaque parcours inclut des arrêts photos et découvertes !",
    ),
    (
        "électrique",
        "Nos karts sont 100% électriques ! 🌱\n• Zéro émission\n• Silencieux\n• Respectueux du patrimoine\n• Autonomie de 3h\n• Recharge rapide\n\nUne expérience écologique et moderne !",
    ),
    (
        "sécurité",
        "Votre sécurité est notre priorité :\n🛡️ Casques fournis et désinfectés\n🛡️ Formation avant départ\n🛡️ Karts bridés à 25 km/h\n🛡️ Accompagnement par guide\n🛡️ Assurance incluse\n\nTout est prévu pour votre sécurité !",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub keyword: String,
    pub response: String,
}

impl Rule {
    /// Keywords are stored lowercased so they compare against lowercased input.
    pub fn new(keyword: &str, response: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            response: response.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default: String,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>, default: &str) -> Self {
        Self {
            rules,
            default: default.to_string(),
        }
    }

    /// Returns the response of the first rule whose keyword occurs in `input`,
    /// or the default response. Never fails; empty input gets the default.
    pub fn respond(&self, input: &str) -> &str {
        let input = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| input.contains(rule.keyword.as_str()))
            .map(|rule| rule.response.as_str())
            .unwrap_or(&self.default)
    }

    /// Keyword of the rule that would answer `input`, if any.
    pub fn matched_keyword(&self, input: &str) -> Option<&str> {
        let input = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| input.contains(rule.keyword.as_str()))
            .map(|rule| rule.keyword.as_str())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, response)| Rule::new(keyword, response))
                .collect(),
            DEFAULT_RESPONSE,
        )
    }
}
