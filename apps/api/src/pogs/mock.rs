use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::models::pog::{Pog, PogFields};
use crate::pogs::repository::PogRepository;

// --- In-memory stand-in for the pogs table ---
// ids are handed out sequentially like a SERIAL column; clones share the same rows
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<Mutex<Table>>,
}

#[derive(Default)]
struct Table {
    rows: Vec<Pog>,
    next_id: i32,
}

impl Table {
    fn insert(&mut self, fields: &PogFields) -> Pog {
        self.next_id += 1;
        let pog = Pog {
            pogs_id: self.next_id,
            pogs_name: fields.pogs_name.clone(),
            ticker_symbol: fields.ticker_symbol.clone(),
            price: fields.price,
            color: fields.color.clone(),
        };
        self.rows.push(pog.clone());
        pog
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // insert a row directly, bypassing the handlers, and return its id
    pub fn seed(&self, name: &str, ticker: &str, price: f64, color: &str) -> i32 {
        let fields = PogFields {
            pogs_name: name.to_string(),
            ticker_symbol: ticker.to_string(),
            price,
            color: color.to_string(),
        };
        self.inner.lock().unwrap().insert(&fields).pogs_id
    }

    pub fn row_count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl PogRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Pog>> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn find(&self, id: i32) -> Result<Vec<Pog>> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.iter().filter(|p| p.pogs_id == id).cloned().collect())
    }

    async fn create(&self, fields: &PogFields) -> Result<Vec<Pog>> {
        Ok(vec![self.inner.lock().unwrap().insert(fields)])
    }

    async fn update(&self, id: i32, fields: &PogFields) -> Result<Option<Vec<Pog>>> {
        let mut table = self.inner.lock().unwrap();
        let Some(row) = table.rows.iter_mut().find(|p| p.pogs_id == id) else {
            return Ok(None);
        };
        row.pogs_name = fields.pogs_name.clone();
        row.ticker_symbol = fields.ticker_symbol.clone();
        row.price = fields.price;
        row.color = fields.color.clone();
        Ok(Some(vec![row.clone()]))
    }

    async fn delete(&self, id: i32) -> Result<Option<Vec<Pog>>> {
        let mut table = self.inner.lock().unwrap();
        let Some(pos) = table.rows.iter().position(|p| p.pogs_id == id) else {
            return Ok(None);
        };
        Ok(Some(vec![table.rows.remove(pos)]))
    }
}

// --- Repository that fails every call, as a dropped connection would ---
pub struct FailingRepository;

fn unavailable() -> anyhow::Error {
    anyhow::anyhow!("connection refused")
}

#[async_trait]
impl PogRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Pog>> {
        Err(unavailable())
    }

    async fn find(&self, _id: i32) -> Result<Vec<Pog>> {
        Err(unavailable())
    }

    async fn create(&self, _fields: &PogFields) -> Result<Vec<Pog>> {
        Err(unavailable())
    }

    async fn update(&self, _id: i32, _fields: &PogFields) -> Result<Option<Vec<Pog>>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i32) -> Result<Option<Vec<Pog>>> {
        Err(unavailable())
    }
}
