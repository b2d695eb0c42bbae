use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

//브라우저의 sessionStorage 대신 사용하는 저장소. 키/값 문자열만 다룬다.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

//컨트롤러와 테스트가 같은 저장소를 공유할 수 있도록 참조와 Arc에도 구현한다.
impl<T: SessionStorage + ?Sized> SessionStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<T: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[derive(thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access the session storage file.")]
    Io(#[from] std::io::Error),
    #[error("Session storage file is not a valid JSON object.")]
    Format(#[from] serde_json::Error),
    #[error("Session storage lock was poisoned.")]
    Poisoned
}

impl std::fmt::Debug for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::error_chain_fmt(self, f)
    }
}

/*
    20251002 / 전역 sessionStorage를 직접 읽지 않고 컨트롤러 생성 시 세션을 주입한다.
    -> 토큰 키는 여기 한 곳에서만 관리
*/
pub struct TypedSession<S>(S);

impl<S: SessionStorage> TypedSession<S> {
    const TOKEN_KEY: &'static str = "jwt";

    pub fn new(storage: S) -> Self {
        Self(storage)
    }

    pub fn storage(&self) -> &S {
        &self.0
    }

    //빈 문자열은 토큰이 없는 것으로 본다.
    pub fn get_token(&self) -> Result<Option<Secret<String>>, StorageError> {
        let token = self.0
            .get_item(Self::TOKEN_KEY)?
            .filter(|t| !t.trim().is_empty())
            .map(Secret::new);
        Ok(token)
    }

    pub fn set_token(&self, token: Secret<String>) -> Result<(), StorageError> {
        self.0.set_item(Self::TOKEN_KEY, token.expose_secret().to_owned())
    }

    pub fn clear_token(&self) -> Result<(), StorageError> {
        self.0.remove_item(Self::TOKEN_KEY)
    }
}

#[derive(Default)]
pub struct MemoryStorage(Mutex<HashMap<String, String>>);

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.0.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut items = self.0.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.0.lock().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

//CLI 실행 사이에 토큰을 유지하기 위한 JSON 파일 저장소
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(())
        }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            //파일이 없으면 비어 있는 세션이다.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into())
        }
    }

    fn write_all(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, serde_json::to_vec(items)?)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>)
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = self.read_all()?;
        f(&mut items);
        self.write_all(&items)
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_owned(), value);
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}
