//! In-memory shop store.
//!
//! Movies and shops live in id-keyed ordered maps. Ownership is the movie's
//! `shop` field plus a per-shop index of movie ids, kept in lockstep by every
//! mutation. A single `RwLock` guards both registries and the index together,
//! so a mutation touching movies and shops is never observed half-applied.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::error::{StoreError, StoreResult};
use super::models::{
    Movie, MovieId, MovieUpdate, NewMovie, NewShop, Shop, ShopId, ShopRecord, ShopUpdate,
};
use super::search::MovieSearch;
use super::trait_def::ShopStore;
use super::validation::{
    validate_movie_update, validate_new_movie, validate_new_shop, validate_shop_update,
};

const FIRST_ID: i64 = 1;

#[derive(Debug)]
struct Registries {
    movies: BTreeMap<MovieId, Movie>,
    shops: BTreeMap<ShopId, ShopRecord>,
    /// Movie ids owned by each shop, in the order they joined it.
    shop_movies: HashMap<ShopId, Vec<MovieId>>,
    next_movie_id: MovieId,
    next_shop_id: ShopId,
}

impl Default for Registries {
    fn default() -> Self {
        Self {
            movies: BTreeMap::new(),
            shops: BTreeMap::new(),
            shop_movies: HashMap::new(),
            next_movie_id: FIRST_ID,
            next_shop_id: FIRST_ID,
        }
    }
}

impl Registries {
    fn movie(&self, id: MovieId) -> StoreResult<&Movie> {
        self.movies.get(&id).ok_or(StoreError::MovieNotFound(id))
    }

    fn movie_mut(&mut self, id: MovieId) -> StoreResult<&mut Movie> {
        self.movies.get_mut(&id).ok_or(StoreError::MovieNotFound(id))
    }

    fn shop_record(&self, id: ShopId) -> StoreResult<&ShopRecord> {
        self.shops.get(&id).ok_or(StoreError::ShopNotFound(id))
    }

    fn movies_of(&self, shop: ShopId) -> Vec<Movie> {
        self.shop_movies
            .get(&shop)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.movies.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn shop_view(&self, record: &ShopRecord) -> Shop {
        Shop {
            id: record.id,
            address: record.address.clone(),
            manager: record.manager.clone(),
            movies: self.movies_of(record.id),
        }
    }

    fn detach_movie(&mut self, shop: ShopId, movie: MovieId) {
        if let Some(ids) = self.shop_movies.get_mut(&shop) {
            ids.retain(|id| *id != movie);
        }
    }

    fn attach_movie(&mut self, shop: ShopId, movie: MovieId) {
        self.shop_movies.entry(shop).or_default().push(movie);
    }
}

/// Shop store holding everything in process memory.
///
/// Nothing survives the process; build a fresh one per server or per test.
#[derive(Debug, Default)]
pub struct InMemoryShopStore {
    registries: RwLock<Registries>,
}

impl InMemoryShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Registries>> {
        self.registries.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Registries>> {
        self.registries.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ShopStore for InMemoryShopStore {
    fn create_shop(&self, shop: NewShop) -> StoreResult<Shop> {
        validate_new_shop(&shop)?;
        let mut reg = self.write()?;

        let id = reg.next_shop_id;
        reg.next_shop_id += 1;
        let record = ShopRecord {
            id,
            address: shop.address,
            manager: shop.manager,
        };
        reg.shop_movies.insert(id, Vec::new());
        let view = reg.shop_view(&record);
        reg.shops.insert(id, record);

        debug!("Created shop {}", id);
        Ok(view)
    }

    fn get_shop(&self, id: ShopId) -> StoreResult<Shop> {
        let reg = self.read()?;
        let record = reg.shop_record(id)?;
        Ok(reg.shop_view(record))
    }

    fn list_shops(&self) -> StoreResult<Vec<Shop>> {
        let reg = self.read()?;
        Ok(reg.shops.values().map(|s| reg.shop_view(s)).collect())
    }

    fn update_shop(&self, id: ShopId, update: ShopUpdate) -> StoreResult<Shop> {
        validate_shop_update(&update)?;
        let mut reg = self.write()?;

        let record = reg.shops.get_mut(&id).ok_or(StoreError::ShopNotFound(id))?;
        record.address = update.address;
        record.manager = update.manager;
        let record = record.clone();

        debug!("Updated shop {}", id);
        Ok(reg.shop_view(&record))
    }

    fn delete_shop(&self, id: ShopId) -> StoreResult<()> {
        let mut reg = self.write()?;
        reg.shop_record(id)?;

        let owned = reg.shop_movies.remove(&id).unwrap_or_default();
        for movie_id in &owned {
            reg.movies.remove(movie_id);
        }
        reg.shops.remove(&id);

        info!("Deleted shop {} along with {} movies", id, owned.len());
        Ok(())
    }

    fn create_movie(&self, movie: NewMovie) -> StoreResult<Movie> {
        validate_new_movie(&movie)?;
        let mut reg = self.write()?;
        reg.shop_record(movie.shop)?;

        let id = reg.next_movie_id;
        reg.next_movie_id += 1;
        let created = Movie {
            id,
            name: movie.name,
            director: movie.director,
            genres: movie.genres,
            shop: movie.shop,
            rent: false,
        };
        reg.movies.insert(id, created.clone());
        reg.attach_movie(created.shop, id);

        debug!("Created movie {} in shop {}", id, created.shop);
        Ok(created)
    }

    fn get_movie(&self, id: MovieId) -> StoreResult<Movie> {
        self.read()?.movie(id).cloned()
    }

    fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.read()?.movies.values().cloned().collect())
    }

    fn update_movie(&self, id: MovieId, update: MovieUpdate) -> StoreResult<Movie> {
        validate_movie_update(&update)?;
        let mut reg = self.write()?;

        let movie = reg.movie_mut(id)?;
        movie.name = update.name;
        movie.director = update.director;
        movie.genres = update.genres;

        debug!("Updated movie {}", id);
        Ok(movie.clone())
    }

    fn set_movie_rent(&self, id: MovieId, rent: bool) -> StoreResult<Movie> {
        let mut reg = self.write()?;

        let movie = reg.movie_mut(id)?;
        movie.rent = rent;

        debug!("Set rent={} on movie {}", rent, id);
        Ok(movie.clone())
    }

    fn delete_movie(&self, id: MovieId) -> StoreResult<()> {
        let mut reg = self.write()?;
        let shop = reg.movie(id)?.shop;

        reg.detach_movie(shop, id);
        reg.movies.remove(&id);

        debug!("Deleted movie {} from shop {}", id, shop);
        Ok(())
    }

    fn move_movie(&self, id: MovieId, new_shop: ShopId) -> StoreResult<Movie> {
        let mut reg = self.write()?;
        let old_shop = reg.movie(id)?.shop;
        reg.shop_record(new_shop)?;

        if old_shop == new_shop {
            return reg.movie(id).cloned();
        }

        reg.detach_movie(old_shop, id);
        reg.attach_movie(new_shop, id);
        let movie = reg.movie_mut(id)?;
        movie.shop = new_shop;

        debug!("Moved movie {} from shop {} to shop {}", id, old_shop, new_shop);
        Ok(movie.clone())
    }

    fn list_shop_movies(&self, shop: ShopId) -> StoreResult<Vec<Movie>> {
        let reg = self.read()?;
        reg.shop_record(shop)?;
        Ok(reg.movies_of(shop))
    }

    fn search_movies(&self, search: &MovieSearch) -> StoreResult<Vec<Movie>> {
        let compiled = search.compile();
        let reg = self.read()?;
        if compiled.is_unconstrained() {
            return Ok(reg.movies.values().cloned().collect());
        }
        Ok(reg
            .movies
            .values()
            .filter(|m| compiled.matches(m))
            .cloned()
            .collect())
    }

    fn movies_count(&self) -> usize {
        self.read().map(|reg| reg.movies.len()).unwrap_or(0)
    }

    fn shops_count(&self) -> usize {
        self.read().map(|reg| reg.shops.len()).unwrap_or(0)
    }
}
