//! Built-in industry profiles for small Caribbean businesses

use super::types::{
    EssentialFunctions, ExampleTexts, IndustryCategory, IndustryProfile, Locale, RiskLevel,
    Vulnerability,
};
use std::collections::HashMap;

use RiskLevel::{High, Low, Medium, VeryHigh};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn vulnerabilities(entries: &[(&str, RiskLevel)]) -> Vec<Vulnerability> {
    entries
        .iter()
        .map(|(hazard_id, level)| Vulnerability {
            hazard_id: hazard_id.to_string(),
            default_risk_level: *level,
        })
        .collect()
}

fn functions(core: &[&str], support: &[&str], administrative: &[&str]) -> EssentialFunctions {
    EssentialFunctions {
        core: strings(core),
        support: strings(support),
        administrative: strings(administrative),
    }
}

struct Examples<'a> {
    purpose: &'a [&'a str],
    products: &'a [&'a str],
    personnel: &'a [&'a str],
    resources: &'a [&'a str],
    customers: &'a [&'a str],
}

impl Examples<'_> {
    fn build(&self) -> ExampleTexts {
        ExampleTexts {
            business_purpose: strings(self.purpose),
            products_services: strings(self.products),
            personnel: strings(self.personnel),
            resource_needs: strings(self.resources),
            customer_base: strings(self.customers),
        }
    }
}

fn grocery_store() -> IndustryProfile {
    let mut translations = HashMap::new();
    translations.insert(
        Locale::Es,
        Examples {
            purpose: &["Tienda de comestibles del barrio que abastece a los residentes de [NEIGHBORHOOD] con productos frescos y artículos del hogar"],
            products: &["Productos frescos, carnes, lácteos, productos secos, artículos de limpieza y tarjetas telefónicas"],
            personnel: &["Propietario/gerente, 2 cajeros, 1 encargado de inventario, 1 repartidor"],
            resources: &["Refrigeración, sistema de punto de venta, proveedores locales, camión de reparto"],
            customers: &["Familias y trabajadores de [NEIGHBORHOOD] y comunidades cercanas de [ISLAND]"],
        }
        .build(),
    );
    translations.insert(
        Locale::Fr,
        Examples {
            purpose: &["Épicerie de quartier approvisionnant les habitants de [NEIGHBORHOOD] en produits frais et articles ménagers"],
            products: &["Produits frais, viandes, produits laitiers, épicerie sèche, produits d'entretien"],
            personnel: &["Propriétaire/gérant, 2 caissiers, 1 magasinier, 1 livreur"],
            resources: &["Réfrigération, caisse enregistreuse, fournisseurs locaux, camion de livraison"],
            customers: &["Familles et travailleurs de [NEIGHBORHOOD] et des communautés voisines de [ISLAND]"],
        }
        .build(),
    );

    IndustryProfile {
        id: "grocery_store".to_string(),
        name: "Grocery Store".to_string(),
        category: IndustryCategory::Retail,
        vulnerabilities: vulnerabilities(&[
            ("power_outage", High),
            ("hurricane", High),
            ("supply_chain_disruption", Medium),
            ("crime", Medium),
            ("flood", Medium),
        ]),
        essential_functions: functions(
            &["Stock replenishment", "Cash and card sales", "Cold storage of perishables"],
            &["Supplier ordering", "Deliveries to customers", "Store cleaning and sanitation"],
            &["Bookkeeping", "Payroll", "Licences and tax filings"],
        ),
        examples: Examples {
            purpose: &["Neighborhood grocery store supplying residents of [NEIGHBORHOOD] with fresh produce and household goods"],
            products: &[
                "Fresh produce, meats, dairy, dry goods, cleaning supplies and phone cards",
                "Local ground provisions and imported packaged foods",
            ],
            personnel: &["Owner/manager, 2 cashiers, 1 stock clerk, 1 delivery driver"],
            resources: &["Refrigeration units, point-of-sale system, local suppliers, delivery van"],
            customers: &[
                "Families and workers from [NEIGHBORHOOD] and nearby communities across [ISLAND]",
                "Small restaurants and cook shops buying in bulk",
            ],
        }
        .build(),
        translations,
        operating_hours: "Monday to Saturday 7:00 AM - 9:00 PM, Sunday 8:00 AM - 2:00 PM".to_string(),
    }
}

fn restaurant() -> IndustryProfile {
    let mut translations = HashMap::new();
    translations.insert(
        Locale::Es,
        Examples {
            purpose: &["Restaurante familiar que sirve cocina caribeña local en [NEIGHBORHOOD]"],
            products: &["Desayuno, almuerzo y cena, comida para llevar y servicio de catering"],
            personnel: &["Propietario, chef, 2 cocineros, 3 meseros, 1 cajero"],
            resources: &["Cocina equipada, gas, refrigeración, agua potable, proveedores de alimentos"],
            customers: &["Trabajadores de oficina, familias y visitantes de [AREA] en [ISLAND]"],
        }
        .build(),
    );

    IndustryProfile {
        id: "restaurant".to_string(),
        name: "Restaurant".to_string(),
        category: IndustryCategory::Hospitality,
        vulnerabilities: vulnerabilities(&[
            ("power_outage", High),
            ("fire", High),
            ("food_contamination", Medium),
            ("hurricane", High),
            ("water_shortage", Medium),
            ("supply_chain_disruption", Medium),
        ]),
        essential_functions: functions(
            &["Food preparation", "Table and takeaway service", "Food safety and cold storage"],
            &["Ingredient purchasing", "Kitchen equipment maintenance", "Cleaning and waste disposal"],
            &["Cash management", "Staff scheduling", "Health permits"],
        ),
        examples: Examples {
            purpose: &["Family restaurant serving local Caribbean cuisine to the [NEIGHBORHOOD] community"],
            products: &[
                "Breakfast, lunch and dinner, takeaway meals and event catering",
                "Jerk chicken, curry goat, fresh juices and daily specials",
            ],
            personnel: &["Owner, head chef, 2 cooks, 3 servers, 1 cashier"],
            resources: &["Commercial kitchen, cooking gas, refrigeration, potable water, food suppliers"],
            customers: &["Office workers, families and visitors to the [AREA] of [ISLAND]"],
        }
        .build(),
        translations,
        operating_hours: "Daily 7:00 AM - 10:00 PM".to_string(),
    }
}

fn hotel() -> IndustryProfile {
    let mut translations = HashMap::new();
    translations.insert(
        Locale::Es,
        Examples {
            purpose: &["Hotel pequeño que ofrece alojamiento a visitantes en [AREA] de [ISLAND]"],
            products: &["Habitaciones, desayuno, excursiones y traslados al aeropuerto"],
            personnel: &["Gerente general, 4 recepcionistas, 6 camareras, personal de mantenimiento"],
            resources: &["Generador, cisterna de agua, sistema de reservas, vehículos de transporte"],
            customers: &["Turistas internacionales y viajeros de negocios"],
        }
        .build(),
    );

    IndustryProfile {
        id: "hotel".to_string(),
        name: "Hotel / Guest House".to_string(),
        category: IndustryCategory::Hospitality,
        vulnerabilities: vulnerabilities(&[
            ("hurricane", VeryHigh),
            ("power_outage", High),
            ("water_shortage", High),
            ("pandemic", High),
            ("economic_downturn", Medium),
            ("fire", Medium),
        ]),
        essential_functions: functions(
            &["Guest accommodation", "Reservations and check-in", "Guest safety"],
            &["Housekeeping", "Maintenance and utilities", "Food and beverage"],
            &["Accounts and billing", "Marketing", "Tourism board licensing"],
        ),
        examples: Examples {
            purpose: &["Small hotel providing accommodation to visitors in the [AREA] of [ISLAND]"],
            products: &["Rooms and suites, breakfast, tour bookings and airport transfers"],
            personnel: &["General manager, 4 front desk staff, 6 housekeepers, maintenance crew"],
            resources: &["Standby generator, water cistern, booking system, guest transport vehicles"],
            customers: &["International tourists, business travellers and local staycation guests"],
        }
        .build(),
        translations,
        operating_hours: "24 hours, 7 days a week".to_string(),
    }
}

fn tour_operator() -> IndustryProfile {
    IndustryProfile {
        id: "tour_operator".to_string(),
        name: "Tour Operator".to_string(),
        category: IndustryCategory::Hospitality,
        vulnerabilities: vulnerabilities(&[
            ("hurricane", VeryHigh),
            ("pandemic", High),
            ("economic_downturn", High),
            ("traffic_disruption", Medium),
        ]),
        essential_functions: functions(
            &["Guided excursions", "Customer bookings", "Guest safety on tour"],
            &["Vehicle and boat maintenance", "Partner coordination"],
            &["Insurance and permits", "Accounts"],
        ),
        examples: Examples {
            purpose: &["Tour company offering guided island excursions from [NEIGHBORHOOD] across [ISLAND]"],
            products: &["Waterfall tours, snorkelling trips, cultural heritage tours"],
            personnel: &["Owner, 3 licensed tour guides, 2 drivers, booking agent"],
            resources: &["Tour buses, boats, safety equipment, online booking platform"],
            customers: &["Cruise ship passengers and hotel guests"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Daily 8:00 AM - 6:00 PM".to_string(),
    }
}

fn clothing_store() -> IndustryProfile {
    IndustryProfile {
        id: "clothing_store".to_string(),
        name: "Clothing Store".to_string(),
        category: IndustryCategory::Retail,
        vulnerabilities: vulnerabilities(&[
            ("crime", High),
            ("hurricane", Medium),
            ("economic_downturn", Medium),
            ("fire", Medium),
        ]),
        essential_functions: functions(
            &["Sales floor operations", "Merchandise display", "Payments"],
            &["Stock receiving", "Alterations"],
            &["Purchasing", "Bookkeeping"],
        ),
        examples: Examples {
            purpose: &["Clothing shop selling affordable fashion to shoppers in [NEIGHBORHOOD]"],
            products: &["Men's, women's and children's clothing, shoes and accessories"],
            personnel: &["Owner, 2 sales associates, part-time seamstress"],
            resources: &["Retail space, display fixtures, point-of-sale system, overseas suppliers"],
            customers: &["Local residents, students and office workers from across [ISLAND]"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Monday to Saturday 9:00 AM - 6:00 PM".to_string(),
    }
}

fn pharmacy() -> IndustryProfile {
    IndustryProfile {
        id: "pharmacy".to_string(),
        name: "Pharmacy".to_string(),
        category: IndustryCategory::Retail,
        vulnerabilities: vulnerabilities(&[
            ("power_outage", High),
            ("supply_chain_disruption", High),
            ("crime", Medium),
            ("hurricane", High),
            ("cyber_attack", Medium),
        ]),
        essential_functions: functions(
            &["Dispensing prescriptions", "Temperature-controlled medicine storage"],
            &["Supplier ordering", "Insurance claims"],
            &["Controlled drug records", "Regulatory compliance"],
        ),
        examples: Examples {
            purpose: &["Community pharmacy serving patients in [NEIGHBORHOOD] with prescriptions and health advice"],
            products: &["Prescription medicines, over-the-counter drugs, first aid supplies, personal care items"],
            personnel: &["Registered pharmacist, 2 pharmacy technicians, cashier"],
            resources: &["Refrigerated medicine storage, dispensing software, wholesale suppliers"],
            customers: &["Patients from local clinics, elderly residents and families in [NEIGHBORHOOD]"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Monday to Saturday 8:00 AM - 8:00 PM".to_string(),
    }
}

fn beauty_salon() -> IndustryProfile {
    IndustryProfile {
        id: "beauty_salon".to_string(),
        name: "Beauty Salon".to_string(),
        category: IndustryCategory::Services,
        vulnerabilities: vulnerabilities(&[
            ("power_outage", Medium),
            ("water_shortage", High),
            ("pandemic", High),
            ("economic_downturn", Medium),
        ]),
        essential_functions: functions(
            &["Hair and beauty treatments", "Appointment scheduling"],
            &["Product ordering", "Equipment sanitation"],
            &["Cash handling", "Business registration"],
        ),
        examples: Examples {
            purpose: &["Beauty salon offering hair, nail and skin care services in [NEIGHBORHOOD]"],
            products: &["Haircuts, braiding, manicures, pedicures, facials and retail hair products"],
            personnel: &["Owner/stylist, 3 stylists, nail technician, receptionist"],
            resources: &["Salon chairs, dryers, water heater, beauty product suppliers"],
            customers: &["Regular clients from [NEIGHBORHOOD] and wedding parties"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Tuesday to Saturday 9:00 AM - 7:00 PM".to_string(),
    }
}

fn it_services() -> IndustryProfile {
    IndustryProfile {
        id: "it_services".to_string(),
        name: "IT Services".to_string(),
        category: IndustryCategory::Services,
        vulnerabilities: vulnerabilities(&[
            ("cyber_attack", VeryHigh),
            ("power_outage", High),
            ("infrastructure_failure", High),
            ("hurricane", Medium),
        ]),
        essential_functions: functions(
            &["Client support", "Software development", "Network administration"],
            &["Hardware procurement", "Data backup"],
            &["Contracts", "Invoicing"],
        ),
        examples: Examples {
            purpose: &["Software and computer support company serving small businesses across [ISLAND]"],
            products: &["Computer repairs, network setup, website development, digital marketing"],
            personnel: &["Director, 3 technicians, 2 developers, office administrator"],
            resources: &["Laptops, servers, internet connectivity, cloud hosting accounts"],
            customers: &["Small and medium businesses, schools and government offices"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Monday to Friday 8:30 AM - 5:30 PM".to_string(),
    }
}

fn auto_repair() -> IndustryProfile {
    IndustryProfile {
        id: "auto_repair".to_string(),
        name: "Auto Repair Garage".to_string(),
        category: IndustryCategory::Services,
        vulnerabilities: vulnerabilities(&[
            ("fire", High),
            ("flood", Medium),
            ("crime", Medium),
            ("supply_chain_disruption", Medium),
        ]),
        essential_functions: functions(
            &["Vehicle diagnostics and repair", "Parts installation"],
            &["Parts ordering", "Tool maintenance"],
            &["Job cards and invoicing"],
        ),
        examples: Examples {
            purpose: &["Auto repair garage providing mechanical and body work in [NEIGHBORHOOD]"],
            products: &["Servicing, brake and suspension repairs, tyre replacement, body work"],
            personnel: &["Owner/mechanic, 3 mechanics, apprentice"],
            resources: &["Vehicle lifts, diagnostic tools, compressor, parts suppliers"],
            customers: &["Private motorists, taxi operators and delivery fleets"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Monday to Saturday 7:30 AM - 5:00 PM".to_string(),
    }
}

fn agro_processing() -> IndustryProfile {
    IndustryProfile {
        id: "agro_processing".to_string(),
        name: "Agro-Processing".to_string(),
        category: IndustryCategory::Industrial,
        vulnerabilities: vulnerabilities(&[
            ("drought", High),
            ("power_outage", High),
            ("equipment_failure", High),
            ("hurricane", High),
            ("food_contamination", Medium),
            ("supply_chain_disruption", Low),
        ]),
        essential_functions: functions(
            &["Raw material intake", "Processing and bottling", "Quality control"],
            &["Equipment maintenance", "Distribution"],
            &["Export documentation", "Food safety certification"],
        ),
        examples: Examples {
            purpose: &["Small factory processing local fruit into sauces and preserves in the [AREA] of [ISLAND]"],
            products: &["Pepper sauce, jams, fruit concentrates and bottled seasonings"],
            personnel: &["Plant manager, 6 line workers, quality officer, driver"],
            resources: &["Processing equipment, bottling line, farm suppliers, cold storage"],
            customers: &["Supermarkets, hotels and export distributors"],
        }
        .build(),
        translations: HashMap::new(),
        operating_hours: "Monday to Friday 6:00 AM - 4:00 PM".to_string(),
    }
}

/// Every built-in industry profile
pub fn caribbean_industries() -> Vec<IndustryProfile> {
    vec![
        grocery_store(),
        restaurant(),
        hotel(),
        tour_operator(),
        clothing_store(),
        pharmacy(),
        beauty_salon(),
        it_services(),
        auto_repair(),
        agro_processing(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hazards::hazard_definition;

    #[test]
    fn test_every_profile_has_examples() {
        for profile in caribbean_industries() {
            let examples = &profile.examples;
            assert!(!examples.business_purpose.is_empty(), "{}", profile.id);
            assert!(!examples.products_services.is_empty(), "{}", profile.id);
            assert!(!examples.personnel.is_empty(), "{}", profile.id);
            assert!(!examples.resource_needs.is_empty(), "{}", profile.id);
            assert!(!examples.customer_base.is_empty(), "{}", profile.id);
            assert!(!profile.vulnerabilities.is_empty(), "{}", profile.id);
        }
    }

    #[test]
    fn test_vulnerabilities_reference_known_hazards() {
        for profile in caribbean_industries() {
            for vulnerability in &profile.vulnerabilities {
                assert!(hazard_definition(&vulnerability.hazard_id).is_some());
            }
        }
    }

    #[test]
    fn test_translation_fallback() {
        let profile = tour_operator();
        assert!(!profile.has_translation(Locale::Fr));
        assert_eq!(profile.examples_for(Locale::Fr), &profile.examples);

        let grocery = grocery_store();
        assert!(grocery.has_translation(Locale::Fr));
        assert!(grocery.examples_for(Locale::Fr).business_purpose[0].starts_with("Épicerie"));
    }
}
