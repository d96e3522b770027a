use serde_json::{Value, json};

pub fn receipt() -> Value {
    json!({
        "type": "receipt",
        "numeroRecu": "R-2024-0042",
        "transactionTimestamp": "2024-05-12 10:31",
        "nomClient": "Ahmed",
        "estCredit": false,
        "articlesVendus": [
            {"nomProduit": "Ciment CPJ 45", "quantite": 10, "prixUnitaire": 850, "total": 8500},
            {"nomProduit": "Sable", "quantite": 2, "prixUnitaire": "1200.5", "total": 2401}
        ],
        "sousTotal": 10901,
        "remiseVente": 0,
        "fraisLivraison": 0,
        "fraisTravail": 0,
        "total": 10901,
        "montantPaye": 10901,
        "resteAPayer": 0
    })
}

pub fn credit_receipt() -> Value {
    json!({
        "numeroRecu": "R-2024-0043",
        "nomClient": "Karim",
        "estCredit": true,
        "articlesVendus": [
            {"nomProduit": "Brique", "quantite": 500, "prixUnitaire": 25, "total": 12500}
        ],
        "sousTotal": 12500,
        "remiseVente": 500,
        "fraisLivraison": 1500,
        "fraisTravail": 1000,
        "total": 14500,
        "montantPaye": 4500,
        "resteAPayer": 10000
    })
}

pub fn debt_summary() -> Value {
    json!({
        "type": "debt_summary",
        "clientName": "Karim",
        "printDate": "2024-05-20",
        "invoices": [
            {"sale_id": 101, "date": "2024-04-01", "delivery_price": 1500, "labor_cost": 0,
             "total": 14500, "remaining": 10000},
            {"sale_id": 117, "date": "2024-04-19", "delivery_price": 0, "labor_cost": 800,
             "total": 6800, "remaining": 6800}
        ],
        "totalRemaining": 16800
    })
}

pub fn debt_invoices() -> Value {
    json!({
        "type": "debt_invoices",
        "clientName": "Karim",
        "printDate": "2024-05-20",
        "invoices": [
            {"sale_id": 101, "date": "2024-04-01", "delivery_price": 1500, "labor_cost": 0,
             "total": 14500, "remaining": 10000,
             "items": [
                 {"product_name": "Brique", "quantity": 500, "unit_price": 25, "total_price": 12500}
             ]},
            {"sale_id": 117, "date": "2024-04-19", "labor_cost": 800,
             "total": 6800, "remaining": 6800,
             "items": [
                 {"product_name": "Ciment", "quantity": 4, "unit_price": 1500, "total_price": 6000},
                 {"product_name": "Gravier", "quantity": 0, "unit_price": 0, "total_price": 0}
             ]}
        ],
        "totalRemaining": 16800
    })
}

pub fn all_documents() -> Vec<Value> {
    vec![receipt(), credit_receipt(), debt_summary(), debt_invoices()]
}
